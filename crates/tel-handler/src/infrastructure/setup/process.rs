//! Child-process setup launcher for non-Windows platforms.
//!
//! The shipped binary only has a telephony binding on Windows; elsewhere
//! `UnsupportedTelephony` fails to initialise and the run stops before setup
//! mode.  This launcher is the setup half for a provider on another platform
//! (for example a SIP-based one) and is wired in as `NativeSetupLauncher` so
//! adding such a provider needs no change to `main`.

use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use super::setup_next_to_executable;
use crate::application::click_to_dial::{SetupError, SetupLauncher};

/// Runs the installer as a child process and waits for it.
#[derive(Debug, Default)]
pub struct ProcessSetupLauncher {
    /// Explicit installer path; `None` means "next to the executable".
    path: Option<PathBuf>,
}

impl ProcessSetupLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl SetupLauncher for ProcessSetupLauncher {
    fn launch(&self) -> Result<(), SetupError> {
        let path = match &self.path {
            Some(path) if path.is_file() => path.clone(),
            Some(path) => return Err(SetupError::NotFound(path.display().to_string())),
            None => setup_next_to_executable()?,
        };

        info!("running setup {}", path.display());
        let status = Command::new(&path)
            .status()
            .map_err(|e| SetupError::Launch(e.to_string()))?;
        if !status.success() {
            return Err(SetupError::Launch(format!("setup exited with {status}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_launch_missing_installer_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let launcher = ProcessSetupLauncher::with_path(dir.path().join("setup"));

        assert!(matches!(launcher.launch(), Err(SetupError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_waits_for_installer_and_checks_exit_status() {
        use std::os::unix::fs::PermissionsExt;

        // Arrange: one installer that succeeds and one that fails
        let dir = TempDir::new().unwrap();
        let ok = dir.path().join("setup-ok");
        let bad = dir.path().join("setup-bad");
        std::fs::write(&ok, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::write(&bad, "#!/bin/sh\nexit 3\n").unwrap();
        for script in [&ok, &bad] {
            std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        // Act / Assert
        assert!(ProcessSetupLauncher::with_path(&ok).launch().is_ok());
        assert!(matches!(
            ProcessSetupLauncher::with_path(&bad).launch(),
            Err(SetupError::Launch(_))
        ));
    }
}
