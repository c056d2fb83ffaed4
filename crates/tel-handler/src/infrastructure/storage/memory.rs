//! In-memory [`SettingsStore`] for tests.
//!
//! Besides holding a configuration, the store can be switched into two broken
//! modes so error paths can be exercised without touching the file system:
//!
//! - [`MemorySettingsStore::corrupt`] makes `load` report malformed content.
//! - [`MemorySettingsStore::fail_saves`] makes `save` report an I/O error.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use tel_core::HandlerConfig;

use crate::application::settings::{SettingsError, SettingsStore};

const MEMORY_PATH: &str = "<memory>";

/// A settings store that never touches the disk.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    stored: RefCell<Option<HandlerConfig>>,
    corrupt: Cell<bool>,
    fail_saves: Cell<bool>,
}

impl MemorySettingsStore {
    /// Creates an empty store (loading reports "not found").
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `config`.
    pub fn with_config(config: HandlerConfig) -> Self {
        let store = Self::new();
        *store.stored.borrow_mut() = Some(config);
        store
    }

    /// Makes every subsequent `load` fail as if the file were malformed.
    pub fn corrupt(&self) {
        self.corrupt.set(true);
    }

    /// Makes every subsequent `save` fail with a permission error.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    /// The configuration most recently saved (or seeded), if any.
    pub fn stored(&self) -> Option<HandlerConfig> {
        self.stored.borrow().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<HandlerConfig, SettingsError> {
        if self.corrupt.get() {
            return Err(SettingsError::Malformed {
                path: PathBuf::from(MEMORY_PATH),
                reason: "corrupted for test".to_string(),
            });
        }
        self.stored
            .borrow()
            .clone()
            .ok_or_else(|| SettingsError::NotFound {
                path: PathBuf::from(MEMORY_PATH),
            })
    }

    fn save(&self, config: &HandlerConfig) -> Result<(), SettingsError> {
        if self.fail_saves.get() {
            return Err(SettingsError::Io {
                path: PathBuf::from(MEMORY_PATH),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        *self.stored.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
