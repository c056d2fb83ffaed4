//! Terminal line picker.
//!
//! Shows the provider's lines as a `dialoguer` selection list with the stored
//! line preselected.  Esc or `q` cancels.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::warn;

use crate::application::select_line::{LinePicker, LineSelection, PickerError};

#[derive(Debug, Default)]
pub struct ConsoleLinePicker;

impl ConsoleLinePicker {
    pub fn new() -> Self {
        Self
    }
}

/// Index of `current` in `available`, or the first entry when it is absent.
fn preselected_index(current: &str, available: &[String]) -> usize {
    available.iter().position(|name| name == current).unwrap_or(0)
}

impl LinePicker for ConsoleLinePicker {
    fn pick(&self, current: &str, available: &[String]) -> Result<LineSelection, PickerError> {
        let term = Term::stderr();
        if available.is_empty() {
            warn!("no telephony lines available to choose from");
            term.write_line(&format!("{}", style("No telephony lines available.").yellow()))
                .map_err(|e| PickerError::Platform(e.to_string()))?;
            return Ok(LineSelection::Cancelled);
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the line to dial out on")
            .items(available)
            .default(preselected_index(current, available))
            .interact_on_opt(&term)
            .map_err(|e| PickerError::Platform(format!("Selection error: {e}")))?;

        Ok(match choice {
            Some(index) => LineSelection::Selected(available[index].clone()),
            None => LineSelection::Cancelled,
        })
    }
}
