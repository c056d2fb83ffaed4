//! Setup launcher implementations.
//!
//! The installer ships next to the handler executable.  Running it registers
//! the handler for the `tel:` scheme, which needs administrator rights on
//! Windows; elsewhere it is simply run as a child process.
//!
//! | Module    | OS         | Mechanism                                  |
//! |-----------|------------|--------------------------------------------|
//! | `windows` | Windows    | `ShellExecuteExW` with the `runas` verb    |
//! | `process` | all others | `std::process::Command`                    |
//!
//! On platforms without a telephony provider the run ends before setup mode,
//! so `process` is only reached through its own tests until one is added.

use std::path::{Path, PathBuf};

use crate::application::click_to_dial::SetupError;

/// File name of the installer.
#[cfg(target_os = "windows")]
pub const SETUP_EXECUTABLE: &str = "setup.exe";
#[cfg(not(target_os = "windows"))]
pub const SETUP_EXECUTABLE: &str = "setup";

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::ElevatedSetupLauncher as NativeSetupLauncher;

#[cfg(not(target_os = "windows"))]
pub mod process;

#[cfg(not(target_os = "windows"))]
pub use process::ProcessSetupLauncher as NativeSetupLauncher;

/// Path of the installer inside `dir`, if it exists there.
pub fn locate_setup(dir: &Path) -> Result<PathBuf, SetupError> {
    let path = dir.join(SETUP_EXECUTABLE);
    if path.is_file() {
        Ok(path)
    } else {
        Err(SetupError::NotFound(path.display().to_string()))
    }
}

/// Path of the installer next to the running executable.
pub fn setup_next_to_executable() -> Result<PathBuf, SetupError> {
    let exe = std::env::current_exe()
        .map_err(|e| SetupError::NotFound(format!("cannot resolve own location: {e}")))?;
    let dir = exe
        .parent()
        .ok_or_else(|| SetupError::NotFound(exe.display().to_string()))?;
    locate_setup(dir)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
