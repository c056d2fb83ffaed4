//! ValidateLineUseCase: makes sure the configured line exists before dialing.
//!
//! # Validation states (for beginners)
//!
//! ```text
//!            ┌──────────── confirmed ────────────┐
//!            ▼                                   │
//!         Start ── name empty ──► ConfiguringLine ┤
//!            │                                   └─ cancelled ─► name still empty? ─► NoLineConfigured (fatal)
//!        name set                                                      │ no
//!            ▼                                                         ▼
//!       LineNameSet ◄──────────────────────────────────────────────────┘
//!            │
//!     line found? ── yes ──► Resolved
//!            │ no
//!   "reconfigure?" ── no ──► Declined
//!            │ yes
//!   Reconfiguring ── confirmed ──► Start
//!            └──── cancelled ───► Declined
//! ```
//!
//! The loop only advances on user input (picker or yes/no prompt), so it
//! ends as soon as the user stops choosing to retry.

use tel_core::HandlerConfig;
use tracing::{error, info, warn};

use super::notify::{confirm_with_user, inform_user, Notice};
use super::select_line::{configure_line, ConfigureOutcome};
use super::telephony::{find_line, TelephonyProvider};
use super::Services;

/// Message shown when no line is configured after the selection flow.
pub const NO_LINE_MESSAGE: &str = "No TAPI line configured or none available.";

/// Terminal result of line validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineValidation {
    /// The configured line exists.
    Resolved,
    /// The configured line does not exist and the user chose not to pick
    /// another one.  Dialing should be skipped.
    Declined,
    /// No line is configured even after offering the picker.  The user has
    /// been told; the process should exit.
    NoLineConfigured,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Start,
    ConfiguringLine,
    LineNameSet,
    Reconfiguring,
}

/// Validates the line named in `config`, running the selection flow as needed.
pub fn validate_line<P: TelephonyProvider>(
    provider: &P,
    config: &mut HandlerConfig,
    services: &Services<'_>,
) -> LineValidation {
    let mut state = State::Start;
    loop {
        state = match state {
            State::Start if config.has_line() => State::LineNameSet,
            State::Start => {
                warn!("no line configuration value set; starting line selection");
                State::ConfiguringLine
            }

            State::ConfiguringLine => match configure_line(provider, config, services) {
                ConfigureOutcome::Confirmed => State::Start,
                ConfigureOutcome::Cancelled if config.has_line() => State::LineNameSet,
                ConfigureOutcome::Cancelled => {
                    error!("no telephony line selected");
                    inform_user(
                        services.notifier,
                        &Notice::new("Configuration error", NO_LINE_MESSAGE),
                    );
                    return LineValidation::NoLineConfigured;
                }
            },

            State::LineNameSet => {
                let name = &config.line_to_use;
                if find_line(provider, name).is_some() {
                    info!("line '{name}' found");
                    return LineValidation::Resolved;
                }

                error!("unable to find telephony line with name '{name}'");
                let question = Notice::error(format!(
                    "Unable to find TAPI line with name '{name}'!\nDo you wish to select another TAPI line?"
                ));
                if !confirm_with_user(services.notifier, &question) {
                    return LineValidation::Declined;
                }
                State::Reconfiguring
            }

            State::Reconfiguring => match configure_line(provider, config, services) {
                ConfigureOutcome::Confirmed => State::Start,
                ConfigureOutcome::Cancelled => return LineValidation::Declined,
            },
        };
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::select_line::LineSelection;
    use crate::infrastructure::line_picker::mock::MockLinePicker;
    use crate::infrastructure::notifier::mock::MockNotifier;
    use crate::infrastructure::storage::memory::MemorySettingsStore;
    use crate::infrastructure::telephony::mock::MockTelephony;

    struct Fixture {
        store: MemorySettingsStore,
        notifier: MockNotifier,
        picker: MockLinePicker,
    }

    impl Fixture {
        fn new(answers: Vec<bool>, picks: Vec<LineSelection>) -> Self {
            Self {
                store: MemorySettingsStore::new(),
                notifier: MockNotifier::answering(answers),
                picker: MockLinePicker::answering(picks),
            }
        }

        fn services(&self) -> Services<'_> {
            Services {
                settings: &self.store,
                notifier: &self.notifier,
                picker: &self.picker,
            }
        }
    }

    #[test]
    fn test_validate_existing_line_resolves_without_prompting() {
        // Arrange
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        let fx = Fixture::new(vec![], vec![]);
        let mut cfg = HandlerConfig::with_line("SIP Line");

        // Act
        let result = validate_line(&provider, &mut cfg, &fx.services());

        // Assert
        assert_eq!(result, LineValidation::Resolved);
        assert!(fx.picker.shown().is_empty());
        assert!(fx.notifier.informed().is_empty());
        assert!(fx.notifier.asked().is_empty());
    }

    #[test]
    fn test_validate_empty_line_runs_picker_then_resolves() {
        // Arrange
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        let fx = Fixture::new(vec![], vec![LineSelection::Selected("SIP Line".into())]);
        let mut cfg = HandlerConfig::default();

        // Act
        let result = validate_line(&provider, &mut cfg, &fx.services());

        // Assert
        assert_eq!(result, LineValidation::Resolved);
        assert_eq!(cfg.line_to_use, "SIP Line");
        assert_eq!(fx.picker.shown().len(), 1);
        assert_eq!(fx.store.stored(), Some(HandlerConfig::with_line("SIP Line")));
    }

    #[test]
    fn test_validate_empty_line_cancelled_is_fatal() {
        // Arrange
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        let fx = Fixture::new(vec![], vec![LineSelection::Cancelled]);
        let mut cfg = HandlerConfig::default();

        // Act
        let result = validate_line(&provider, &mut cfg, &fx.services());

        // Assert
        assert_eq!(result, LineValidation::NoLineConfigured);
        assert_eq!(
            fx.notifier.informed(),
            vec![Notice::new("Configuration error", NO_LINE_MESSAGE)]
        );
    }

    #[test]
    fn test_validate_missing_line_declined_does_not_open_picker() {
        // Arrange
        let provider = MockTelephony::with_lines(&["Line 1"]);
        let fx = Fixture::new(vec![false], vec![]);
        let mut cfg = HandlerConfig::with_line("Old Line");

        // Act
        let result = validate_line(&provider, &mut cfg, &fx.services());

        // Assert
        assert_eq!(result, LineValidation::Declined);
        assert!(fx.picker.shown().is_empty());
        let asked = fx.notifier.asked();
        assert_eq!(asked.len(), 1);
        assert!(asked[0].message.contains("'Old Line'"));
        assert_eq!(cfg.line_to_use, "Old Line");
    }

    #[test]
    fn test_validate_missing_line_reconfigured_resolves() {
        // Arrange
        let provider = MockTelephony::with_lines(&["Line 1", "SIP Line"]);
        let fx = Fixture::new(vec![true], vec![LineSelection::Selected("SIP Line".into())]);
        let mut cfg = HandlerConfig::with_line("Old Line");

        // Act
        let result = validate_line(&provider, &mut cfg, &fx.services());

        // Assert
        assert_eq!(result, LineValidation::Resolved);
        assert_eq!(cfg.line_to_use, "SIP Line");
    }

    #[test]
    fn test_validate_missing_line_reconfigure_cancelled_is_declined() {
        let provider = MockTelephony::with_lines(&["Line 1"]);
        let fx = Fixture::new(vec![true], vec![LineSelection::Cancelled]);
        let mut cfg = HandlerConfig::with_line("Old Line");

        let result = validate_line(&provider, &mut cfg, &fx.services());

        assert_eq!(result, LineValidation::Declined);
        assert!(fx.notifier.informed().is_empty());
    }

    #[test]
    fn test_validate_repeated_wrong_picks_loop_until_user_declines() {
        // Arrange: the user picks two lines that vanish before lookup, then gives up
        let provider = MockTelephony::with_lines(&["Line 1"]);
        let fx = Fixture::new(
            vec![true, true, false],
            vec![
                LineSelection::Selected("Ghost A".into()),
                LineSelection::Selected("Ghost B".into()),
            ],
        );
        let mut cfg = HandlerConfig::with_line("Old Line");

        // Act
        let result = validate_line(&provider, &mut cfg, &fx.services());

        // Assert
        assert_eq!(result, LineValidation::Declined);
        assert_eq!(fx.picker.shown().len(), 2);
        assert_eq!(fx.notifier.asked().len(), 3);
        assert_eq!(cfg.line_to_use, "Ghost B");
    }

    #[test]
    fn test_validate_no_lines_at_all_with_cancel_is_fatal() {
        let provider = MockTelephony::with_lines(&[]);
        let fx = Fixture::new(vec![], vec![LineSelection::Cancelled]);
        let mut cfg = HandlerConfig::default();

        assert_eq!(
            validate_line(&provider, &mut cfg, &fx.services()),
            LineValidation::NoLineConfigured
        );
    }
}
