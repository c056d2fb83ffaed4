//! User notification capability.
//!
//! The handler has no main window; every problem the user must know about is
//! shown as a blocking dialog.  Use cases talk to a [`UserNotifier`] instead
//! of a concrete dialog API, so tests can record the notices and script the
//! yes/no answers.

use thiserror::Error;

/// Error type for notifier back ends.
///
/// Use cases never propagate it: a notice that cannot be shown is logged and
/// a confirmation that cannot be asked counts as "no".
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("platform error: {0}")]
    Platform(String),
}

/// A notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Dialog title, e.g. `"Error"` or `"Configuration error"`.
    pub title: String,
    /// Dialog body.
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// A notice titled `"Error"`.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

/// Blocking user notifications.
pub trait UserNotifier {
    /// Shows an acknowledge-only notice and blocks until it is dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the notice could not be displayed.
    fn inform(&self, notice: &Notice) -> Result<(), NotifyError>;

    /// Asks a yes/no question and blocks until it is answered.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the question could not be displayed.
    fn confirm(&self, notice: &Notice) -> Result<bool, NotifyError>;
}

/// Shows `notice`, logging instead of failing if the notifier is broken.
pub fn inform_user(notifier: &dyn UserNotifier, notice: &Notice) {
    if let Err(e) = notifier.inform(notice) {
        tracing::error!("could not show notice '{}': {e}", notice.message);
    }
}

/// Asks `notice` as a yes/no question; an unanswerable question counts as "no".
pub fn confirm_with_user(notifier: &dyn UserNotifier, notice: &Notice) -> bool {
    notifier.confirm(notice).unwrap_or_else(|e| {
        tracing::error!("could not ask '{}': {e}", notice.message);
        false
    })
}
