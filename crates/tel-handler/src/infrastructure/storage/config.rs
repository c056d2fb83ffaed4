//! XML-based configuration persistence.
//!
//! Reads and writes [`HandlerConfig`] to the per-user local data directory:
//! - Windows:  `%LOCALAPPDATA%\TelProtocolHandler\config.xml`
//! - Linux:    `~/.local/share/TelProtocolHandler/config.xml`
//! - macOS:    `~/Library/Application Support/TelProtocolHandler/config.xml`
//!
//! The file holds a single element:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <ConfigContainer><LineToUse>SIP Line</LineToUse></ConfigContainer>
//! ```
//!
//! Reading goes through `quick-xml`'s serde support.  Writing uses the event
//! writer instead: the deserializer trims whitespace around text, so leading
//! and trailing whitespace of the line name is written as character
//! references (`&#x20;`), which survive the trim and decode to the original
//! characters.

use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tel_core::domain::config::{config_file_path, LINE_ELEMENT, ROOT_ELEMENT};
use tel_core::HandlerConfig;

use crate::application::settings::{SettingsError, SettingsStore};

/// Whitespace as trimmed by the XML reader.
fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn push_char_refs(out: &mut String, whitespace: &str) {
    for c in whitespace.chars() {
        out.push_str(&format!("&#x{:X};", u32::from(c)));
    }
}

/// Escapes `text` for element content, keeping its edge whitespace intact.
fn escape_text(text: &str) -> String {
    let rest = text.trim_start_matches(is_xml_space);
    let leading = &text[..text.len() - rest.len()];
    let core = rest.trim_end_matches(is_xml_space);
    let trailing = &rest[core.len()..];

    let mut out = String::with_capacity(text.len());
    push_char_refs(&mut out, leading);
    out.push_str(&quick_xml::escape::escape(core));
    push_char_refs(&mut out, trailing);
    out
}

/// Renders the complete file: declaration, then the configuration element.
fn encode(config: &HandlerConfig) -> Result<String, SettingsError> {
    let mut writer = Writer::new(Vec::new());
    [
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
        Event::Text(BytesText::from_escaped("\n")),
        Event::Start(BytesStart::new(ROOT_ELEMENT)),
        Event::Start(BytesStart::new(LINE_ELEMENT)),
        Event::Text(BytesText::from_escaped(escape_text(&config.line_to_use))),
        Event::End(BytesEnd::new(LINE_ELEMENT)),
        Event::End(BytesEnd::new(ROOT_ELEMENT)),
        Event::Text(BytesText::from_escaped("\n")),
    ]
    .into_iter()
    .try_for_each(|event| writer.write_event(event))
    .map_err(|e| SettingsError::Encode(e.to_string()))?;

    String::from_utf8(writer.into_inner()).map_err(|e| SettingsError::Encode(e.to_string()))
}

/// Resolves the default configuration file path for the current user.
///
/// Returns `None` when the platform's local data directory cannot be
/// determined (e.g. `HOME` unset in a stripped container).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| config_file_path(&dir))
}

/// [`SettingsStore`] backed by an XML file.
#[derive(Debug, Clone)]
pub struct XmlSettingsStore {
    path: PathBuf,
}

impl XmlSettingsStore {
    /// Creates a store that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configuration file this store uses.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for XmlSettingsStore {
    fn load(&self) -> Result<HandlerConfig, SettingsError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            // Also covers a missing parent directory.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SettingsError::NotFound {
                    path: self.path.clone(),
                })
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        quick_xml::de::from_str(&content).map_err(|e| SettingsError::Malformed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, config: &HandlerConfig) -> Result<(), SettingsError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let text = encode(config)?;
        std::fs::write(&self.path, text).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notify::Notice;
    use crate::application::settings::{save_failed_message, save_settings};
    use crate::infrastructure::notifier::mock::MockNotifier;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> XmlSettingsStore {
        XmlSettingsStore::new(config_file_path(dir.path()))
    }

    #[test]
    fn test_save_then_load_on_fresh_store_round_trips() {
        // Arrange
        let dir = TempDir::new().unwrap();
        store_in(&dir)
            .save(&HandlerConfig::with_line("Line A"))
            .expect("save");

        // Act
        let loaded = store_in(&dir).load().expect("load");

        // Assert
        assert_eq!(loaded.line_to_use, "Line A");
    }

    #[test]
    fn test_save_then_load_keeps_edge_whitespace_of_line_name() {
        // Arrange
        let dir = TempDir::new().unwrap();
        store_in(&dir)
            .save(&HandlerConfig::with_line("  Line 1 "))
            .expect("save");

        // Act
        let loaded = store_in(&dir).load().expect("load");

        // Assert
        assert_eq!(loaded.line_to_use, "  Line 1 ");
    }

    #[test]
    fn test_save_then_load_keeps_markup_and_inner_whitespace() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for name in ["A & <B>", "\tLine\t2\t", "Line  3", "   "] {
            store.save(&HandlerConfig::with_line(name)).expect("save");
            assert_eq!(store.load().expect("load").line_to_use, name);
        }
    }

    #[test]
    fn test_escape_text_uses_char_refs_only_at_the_edges() {
        assert_eq!(escape_text("  a & b\t"), "&#x20;&#x20;a &amp; b&#x9;");
        assert_eq!(escape_text("SIP Line"), "SIP Line");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn test_file_name_is_taken_from_path() {
        let store = XmlSettingsStore::new(Path::new("somewhere").join("custom.xml"));
        assert_eq!(store.file_name(), Some("custom.xml"));
    }

    #[test]
    fn test_save_failure_names_the_configured_file() {
        // Arrange: the parent "directory" is a regular file
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = XmlSettingsStore::new(blocker.join("custom.xml"));
        let notifier = MockNotifier::new();

        // Act
        let saved = save_settings(&store, &notifier, &HandlerConfig::with_line("Line A"));

        // Assert
        assert!(!saved);
        assert_eq!(
            notifier.informed(),
            vec![Notice::error(save_failed_message("custom.xml"))]
        );
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!dir.path().join("TelProtocolHandler").exists());

        store.save(&HandlerConfig::with_line("Line A")).expect("save");

        assert!(store.path().is_file());
    }

    #[test]
    fn test_save_writes_declaration_and_legacy_elements() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&HandlerConfig::with_line("SIP Line")).expect("save");

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(text.contains("<LineToUse>SIP Line</LineToUse>"));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&HandlerConfig::with_line("First")).expect("save");
        store.save(&HandlerConfig::with_line("Second")).expect("save");

        assert_eq!(store.load().unwrap().line_to_use, "Second");
    }

    #[test]
    fn test_load_missing_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let result = store_in(&dir).load();
        assert!(matches!(result, Err(SettingsError::NotFound { .. })));
    }

    #[test]
    fn test_load_malformed_file_reports_malformed() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "<ConfigContainer><LineToUse>oops").unwrap();

        // Act
        let result = store.load();

        // Assert
        assert!(matches!(result, Err(SettingsError::Malformed { .. })));
    }

    #[test]
    fn test_load_empty_file_reports_malformed() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "").unwrap();

        assert!(matches!(store.load(), Err(SettingsError::Malformed { .. })));
    }

    #[test]
    fn test_save_into_unwritable_location_reports_io_error() {
        // Arrange: the would-be parent directory is a regular file
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("TelProtocolHandler");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = store_in(&dir);

        // Act
        let result = store.save(&HandlerConfig::with_line("Line A"));

        // Assert
        assert!(matches!(result, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn test_default_config_path_ends_with_config_xml() {
        if let Some(path) = default_config_path() {
            assert!(
                path.ends_with("TelProtocolHandler/config.xml"),
                "unexpected config path {path:?}"
            );
        }
        // None (no data directory in a stripped CI env) is also acceptable.
    }
}
