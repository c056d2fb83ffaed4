//! Infrastructure layer for the handler.
//!
//! Contains OS-facing adapters for every collaborator trait declared in the
//! application layer, plus recording test doubles.
//!
//! **Dependency rule**: this layer may depend on `application` and `tel_core`,
//! but MUST NOT be imported by the `application` layer outside of tests.
//!
//! # Sub-modules
//!
//! - **`storage`** – `XmlSettingsStore` (the per-user `config.xml`) and an
//!   in-memory store for tests.
//!
//! - **`telephony`** – TAPI 3 provider on Windows, an "unsupported" provider
//!   elsewhere, and `MockTelephony` for tests.
//!
//! - **`notifier`** – Win32 message boxes on Windows, terminal output and
//!   prompts elsewhere, and `MockNotifier` for tests.
//!
//! - **`line_picker`** – Terminal line selection and `MockLinePicker`.
//!
//! - **`setup`** – Launches the installer that sits next to the executable.

pub mod line_picker;
pub mod notifier;
pub mod setup;
pub mod storage;
pub mod telephony;
