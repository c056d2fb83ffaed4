//! Elevated setup launcher for Windows.
//!
//! Registering a URL protocol handler writes to `HKEY_LOCAL_MACHINE`, so the
//! installer is started through the shell with the `runas` verb (UAC prompt)
//! and a hidden window.  The launcher blocks until the installer exits.

#![cfg(target_os = "windows")]

use std::path::PathBuf;

use tracing::{info, warn};
use windows::core::{w, HSTRING, PCWSTR};
use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::Threading::{WaitForSingleObject, INFINITE};
use windows::Win32::UI::Shell::{ShellExecuteExW, SEE_MASK_NOCLOSEPROCESS, SHELLEXECUTEINFOW};
use windows::Win32::UI::WindowsAndMessaging::SW_HIDE;

use super::setup_next_to_executable;
use crate::application::click_to_dial::{SetupError, SetupLauncher};

#[derive(Debug, Default)]
pub struct ElevatedSetupLauncher {
    /// Explicit installer path; `None` means "next to the executable".
    path: Option<PathBuf>,
}

impl ElevatedSetupLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl SetupLauncher for ElevatedSetupLauncher {
    fn launch(&self) -> Result<(), SetupError> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => setup_next_to_executable()?,
        };
        info!("running elevated setup {}", path.display());

        let file = HSTRING::from(path.as_os_str());
        let mut info = SHELLEXECUTEINFOW {
            cbSize: std::mem::size_of::<SHELLEXECUTEINFOW>() as u32,
            fMask: SEE_MASK_NOCLOSEPROCESS,
            lpVerb: w!("runas"),
            lpFile: PCWSTR(file.as_ptr()),
            nShow: SW_HIDE.0,
            ..Default::default()
        };

        // SAFETY: `info` is fully initialised and `file` outlives the call.
        unsafe { ShellExecuteExW(&mut info) }.map_err(|e| SetupError::Launch(e.to_string()))?;

        // No process handle when the shell reused an existing process.
        if info.hProcess.is_invalid() {
            return Ok(());
        }
        // SAFETY: `hProcess` is owned by us because of SEE_MASK_NOCLOSEPROCESS.
        unsafe {
            WaitForSingleObject(info.hProcess, INFINITE);
            if let Err(e) = CloseHandle(info.hProcess) {
                warn!("could not close setup process handle: {e}");
            }
        }
        Ok(())
    }
}
