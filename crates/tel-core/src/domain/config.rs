//! The persisted handler configuration record.
//!
//! The handler keeps exactly one setting between runs: the name of the
//! telephony line to dial out on.  It lives in
//! `<local-app-data>/TelProtocolHandler/config.xml`:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ConfigContainer>
//!   <LineToUse>SIP Line</LineToUse>
//! </ConfigContainer>
//! ```
//!
//! The element names match files written by earlier releases of the handler,
//! so an existing installation keeps its line selection after an upgrade.
//!
//! # Serde default values
//!
//! `line_to_use` is annotated with `#[serde(default)]`, so a file that is
//! missing the element (or an empty `<ConfigContainer/>`) still loads and
//! yields an empty line name, which the line validator treats as
//! "not configured yet".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory created under the per-user local data directory.
pub const CONFIG_DIR_NAME: &str = "TelProtocolHandler";

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "config.xml";

/// Root element of the configuration file.
pub const ROOT_ELEMENT: &str = "ConfigContainer";

/// Element holding [`HandlerConfig::line_to_use`].
pub const LINE_ELEMENT: &str = "LineToUse";

/// Settings persisted between handler runs.
///
/// One instance is created at process start and passed explicitly to every
/// use case that reads or changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ConfigContainer")]
pub struct HandlerConfig {
    /// Name of the telephony line (provider address name) used for calls.
    /// Empty means no line has been chosen yet.
    #[serde(rename = "LineToUse", default)]
    pub line_to_use: String,
}

impl HandlerConfig {
    /// Creates a configuration that dials out on `line`.
    pub fn with_line(line: impl Into<String>) -> Self {
        Self {
            line_to_use: line.into(),
        }
    }

    /// Returns `true` when a line name has been stored.
    pub fn has_line(&self) -> bool {
        !self.line_to_use.is_empty()
    }
}

/// Builds the configuration file path below a per-user data directory.
///
/// ```rust
/// use std::path::Path;
/// use tel_core::domain::config::config_file_path;
///
/// let path = config_file_path(Path::new("/home/ada/.local/share"));
/// assert!(path.ends_with("TelProtocolHandler/config.xml"));
/// ```
pub fn config_file_path(local_data_dir: &Path) -> PathBuf {
    local_data_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
