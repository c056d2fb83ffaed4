//! Turns the process arguments into the number to dial.
//!
//! The pure rules live in [`tel_core::normalize_number`]; this use case adds
//! the user-facing side: bad input is logged and shown in an error dialog,
//! and an empty string is returned so the call step becomes a no-op.

use tel_core::normalize_number;
use tracing::error;

use super::notify::{inform_user, Notice, UserNotifier};

/// Returns the number to dial, or an empty string after reporting bad input.
pub fn number_to_call<S: AsRef<str>>(args: &[S], notifier: &dyn UserNotifier) -> String {
    match normalize_number(args) {
        Ok(number) => number,
        Err(e) => {
            error!("{e}");
            inform_user(notifier, &Notice::error(e.to_string()));
            String::new()
        }
    }
}
