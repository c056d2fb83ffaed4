//! Terminal notifier.
//!
//! Notices go to stderr so they never mix with anything a caller pipes from
//! stdout.  Questions use a `dialoguer` confirm prompt; without an interactive
//! terminal the prompt fails and the caller treats that as "no".

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::application::notify::{Notice, NotifyError, UserNotifier};

#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// `"Title: message"` with the title highlighted.
fn render(notice: &Notice) -> String {
    format!("{} {}", style(format!("{}:", notice.title)).red().bold(), notice.message)
}

impl UserNotifier for ConsoleNotifier {
    fn inform(&self, notice: &Notice) -> Result<(), NotifyError> {
        Term::stderr()
            .write_line(&render(notice))
            .map_err(|e| NotifyError::Platform(e.to_string()))
    }

    fn confirm(&self, notice: &Notice) -> Result<bool, NotifyError> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(render(notice))
            .default(false)
            .interact_on(&Term::stderr())
            .map_err(|e| NotifyError::Platform(format!("Confirm error: {e}")))
    }
}
