//! SelectLineUseCase: lets the user choose the line to dial out on.
//!
//! The picker is modal.  It is shown with the currently stored line name as
//! the preselected entry and blocks until the user confirms or cancels.
//!
//! - **Confirmed**: the chosen name is written into the configuration and
//!   persisted.  The caller re-runs line validation on the new name.
//! - **Cancelled**: nothing changes, and the caller must *not* re-validate;
//!   otherwise a user who deliberately closed the picker would be shown it
//!   again straight away.

use tel_core::HandlerConfig;
use thiserror::Error;
use tracing::{error, info};

use super::settings::save_settings;
use super::telephony::{available_lines, TelephonyLine, TelephonyProvider};
use super::Services;

/// Error type for line picker back ends.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("line picker could not be shown: {0}")]
    Platform(String),
}

/// What the user did in the line picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSelection {
    /// The user confirmed this line name.
    Selected(String),
    /// The user dismissed the picker without choosing.
    Cancelled,
}

/// Modal line selection UI.
pub trait LinePicker {
    /// Shows the picker and blocks until it is dismissed.
    ///
    /// `current` is the stored line name (possibly empty) used as the
    /// preselected entry; `available` lists the provider's line names.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError`] if the picker could not be shown.
    fn pick(&self, current: &str, available: &[String]) -> Result<LineSelection, PickerError>;
}

/// Outcome of the selection flow, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// A line was chosen; the caller should validate it.
    Confirmed,
    /// The user cancelled; the caller must not re-validate.
    Cancelled,
}

/// Runs the line selection flow and stores the user's choice in `config`.
pub fn configure_line<P: TelephonyProvider>(
    provider: &P,
    config: &mut HandlerConfig,
    services: &Services<'_>,
) -> ConfigureOutcome {
    let names: Vec<String> = available_lines(provider)
        .iter()
        .map(|l| l.name().to_string())
        .collect();

    let selection = services
        .picker
        .pick(&config.line_to_use, &names)
        .unwrap_or_else(|e| {
            error!("{e}");
            LineSelection::Cancelled
        });

    match selection {
        LineSelection::Selected(name) => {
            info!("line '{name}' selected");
            config.line_to_use = name;
            save_settings(services.settings, services.notifier, config);
            ConfigureOutcome::Confirmed
        }
        LineSelection::Cancelled => {
            info!("line selection cancelled");
            ConfigureOutcome::Cancelled
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
