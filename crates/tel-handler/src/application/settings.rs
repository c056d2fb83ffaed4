//! Loading and saving the handler configuration.
//!
//! The two directions fail differently on purpose:
//!
//! - **Load** never fails.  A missing, unreadable, or malformed file is logged
//!   as a warning and the default configuration (no line) is used, which
//!   simply sends the user through line selection again.
//! - **Save** failures are shown to the user, because the line they just
//!   picked will be forgotten when the process exits.  The run continues with
//!   the in-memory value.

use std::path::PathBuf;

use tel_core::domain::config::CONFIG_FILE_NAME;
use tel_core::HandlerConfig;
use thiserror::Error;
use tracing::{error, info, warn};

use super::notify::{inform_user, Notice, UserNotifier};

/// Error type for configuration persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configuration file (or its directory) does not exist.
    #[error("configuration file {path} not found")]
    NotFound { path: PathBuf },

    /// A file system I/O error occurred.
    #[error("I/O error accessing configuration at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not contain a valid configuration.
    #[error("could not read configuration at {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// The configuration could not be encoded.
    #[error("failed to encode configuration: {0}")]
    Encode(String),
}

/// Persistent storage for [`HandlerConfig`].
pub trait SettingsStore {
    /// Reads the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if nothing usable is stored.
    fn load(&self) -> Result<HandlerConfig, SettingsError>;

    /// Replaces the stored configuration with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the configuration could not be written.
    fn save(&self, config: &HandlerConfig) -> Result<(), SettingsError>;

    /// File name shown to the user when saving fails, if the store has one.
    fn file_name(&self) -> Option<&str> {
        None
    }
}

/// Message shown when `file_name` cannot be written.
pub fn save_failed_message(file_name: &str) -> String {
    format!("Could not write file '{file_name}'. Settings will not be saved.")
}

/// Loads the configuration, falling back to the default on any error.
pub fn load_settings(store: &dyn SettingsStore) -> HandlerConfig {
    match store.load() {
        Ok(cfg) => {
            info!("configuration loaded (line '{}')", cfg.line_to_use);
            cfg
        }
        Err(SettingsError::NotFound { path }) => {
            warn!("configuration file {} not found; using standard settings", path.display());
            HandlerConfig::default()
        }
        Err(e) => {
            warn!("{e}; using standard settings (check XML format?)");
            HandlerConfig::default()
        }
    }
}

/// Saves the configuration, telling the user when that is not possible.
///
/// Returns `true` if the configuration was written.
pub fn save_settings(
    store: &dyn SettingsStore,
    notifier: &dyn UserNotifier,
    config: &HandlerConfig,
) -> bool {
    match store.save(config) {
        Ok(()) => {
            info!("configuration saved (line '{}')", config.line_to_use);
            true
        }
        Err(e) => {
            error!("{e}; settings will not be saved");
            let file_name = store.file_name().unwrap_or(CONFIG_FILE_NAME);
            inform_user(notifier, &Notice::error(save_failed_message(file_name)));
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notifier::mock::MockNotifier;
    use crate::infrastructure::storage::memory::MemorySettingsStore;

    #[test]
    fn test_load_settings_returns_stored_config() {
        // Arrange
        let store = MemorySettingsStore::with_config(HandlerConfig::with_line("Line A"));

        // Act
        let cfg = load_settings(&store);

        // Assert
        assert_eq!(cfg.line_to_use, "Line A");
    }

    #[test]
    fn test_load_settings_falls_back_to_default_when_missing() {
        let store = MemorySettingsStore::new();
        assert_eq!(load_settings(&store), HandlerConfig::default());
    }

    #[test]
    fn test_load_settings_falls_back_to_default_when_malformed() {
        let store = MemorySettingsStore::new();
        store.corrupt();
        assert_eq!(load_settings(&store), HandlerConfig::default());
    }

    #[test]
    fn test_save_settings_persists_and_stays_quiet() {
        // Arrange
        let store = MemorySettingsStore::new();
        let notifier = MockNotifier::new();

        // Act
        let saved = save_settings(&store, &notifier, &HandlerConfig::with_line("Line B"));

        // Assert
        assert!(saved);
        assert_eq!(store.stored(), Some(HandlerConfig::with_line("Line B")));
        assert!(notifier.informed().is_empty());
    }

    #[test]
    fn test_save_settings_failure_notifies_user() {
        // Arrange
        let store = MemorySettingsStore::new();
        store.fail_saves();
        let notifier = MockNotifier::new();

        // Act
        let saved = save_settings(&store, &notifier, &HandlerConfig::with_line("Line B"));

        // Assert
        assert!(!saved);
        assert_eq!(
            notifier.informed(),
            vec![Notice::error(
                "Could not write file 'config.xml'. Settings will not be saved."
            )]
        );
        assert_eq!(store.stored(), None);
    }
}
