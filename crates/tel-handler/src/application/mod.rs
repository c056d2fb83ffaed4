//! Application layer use cases for the handler.
//!
//! # What use cases does the handler have?
//!
//! - **`settings`** – Loads and saves the [`HandlerConfig`] through a
//!   [`settings::SettingsStore`], turning failures into log lines (load) or a
//!   user notification (save).
//!
//! - **`dial_number`** – Converts the raw process arguments into the number
//!   to dial, reporting bad input to the user.
//!
//! - **`select_line`** – Lets the user pick a telephony line and persists the
//!   choice.
//!
//! - **`validate_line`** – Makes sure the configured line exists before a call
//!   is attempted, looping through the selection flow when needed.
//!
//! - **`telephony`** – The provider/line/call traits and line lookup helpers.
//!
//! - **`place_call`** – Issues the outbound call on the configured line.
//!
//! - **`click_to_dial`** – The per-invocation flow that ties the above
//!   together (setup mode or dial mode).
//!
//! Every OS-facing collaborator (telephony provider, notifier, line picker,
//! installer, settings file) is a trait defined here and implemented in the
//! infrastructure layer, so the use cases run against recording fakes in tests.
//!
//! [`HandlerConfig`]: tel_core::HandlerConfig

pub mod click_to_dial;
pub mod dial_number;
pub mod notify;
pub mod place_call;
pub mod select_line;
pub mod settings;
pub mod telephony;
pub mod validate_line;

use notify::UserNotifier;
use select_line::LinePicker;
use settings::SettingsStore;

/// Interactive collaborators shared by the line-selection and validation
/// use cases.
///
/// Built once by the entry point and passed by reference.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    /// Where the configuration is persisted.
    pub settings: &'a dyn SettingsStore,
    /// Error dialogs and yes/no prompts.
    pub notifier: &'a dyn UserNotifier,
    /// Modal line selection.
    pub picker: &'a dyn LinePicker,
}
