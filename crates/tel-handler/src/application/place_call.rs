//! PlaceCallUseCase: issues the outbound call on the configured line.
//!
//! This is a single best-effort attempt.  The number is prefixed with the
//! trunk-access digit, an audio call is created on the line and connected.
//! If the provider rejects either step the failure is logged and the handler
//! exits normally: no retry, no backoff.

use tel_core::{dial_string, HandlerConfig};
use tracing::{error, info, warn};

use super::telephony::{
    find_line, AddressType, MediaType, TelephonyCall, TelephonyError, TelephonyLine,
    TelephonyProvider,
};

/// What happened to a call attempt.
#[derive(Debug)]
pub enum CallOutcome {
    /// Nothing was dialed: the number was empty or the line is unavailable.
    Skipped,
    /// The provider rejected the call.
    Failed(TelephonyError),
    /// The provider accepted the connect request for `dial_string`.
    Connected { dial_string: String },
}

/// Places a call to `number` on the line named in `config`.
///
/// An empty `number` means an earlier step already reported a problem; the
/// provider is not touched at all in that case.
pub fn place_call<P: TelephonyProvider>(
    provider: &P,
    config: &HandlerConfig,
    number: &str,
) -> CallOutcome {
    if number.is_empty() {
        return CallOutcome::Skipped;
    }

    let line_name = &config.line_to_use;
    info!("creating call via line '{line_name}'");

    let Some(line) = find_line(provider, line_name) else {
        warn!("line '{line_name}' is not available; call to '{number}' skipped");
        return CallOutcome::Skipped;
    };

    let dial = dial_string(number);
    let mut call = match line.create_call(&dial, AddressType::PhoneNumber, MediaType::Audio) {
        Ok(call) => call,
        Err(e) => {
            error!("could not create call to '{dial}': {e}");
            return CallOutcome::Failed(e);
        }
    };

    if let Err(e) = call.connect() {
        error!("telephony error while connecting '{dial}': {e}");
        return CallOutcome::Failed(e);
    }

    info!("calling '{number}'...");
    CallOutcome::Connected { dial_string: dial }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::telephony::mock::{CallRequest, MockTelephony};

    #[test]
    fn test_place_call_prefixes_trunk_access_digit() {
        // Arrange
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        let cfg = HandlerConfig::with_line("SIP Line");

        // Act
        let outcome = place_call(&provider, &cfg, "12345");

        // Assert
        assert!(matches!(outcome, CallOutcome::Connected { ref dial_string } if dial_string == "012345"));
        assert_eq!(
            provider.calls(),
            vec![CallRequest {
                line: "SIP Line".to_string(),
                destination: "012345".to_string(),
                address_type: AddressType::PhoneNumber,
                media: MediaType::Audio,
            }]
        );
        assert_eq!(provider.connects(), vec!["012345".to_string()]);
    }

    #[test]
    fn test_place_call_empty_number_does_not_touch_provider() {
        // Arrange
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        let cfg = HandlerConfig::with_line("SIP Line");

        // Act
        let outcome = place_call(&provider, &cfg, "");

        // Assert
        assert!(matches!(outcome, CallOutcome::Skipped));
        assert_eq!(provider.enumerations(), 0);
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn test_place_call_unknown_line_is_skipped() {
        let provider = MockTelephony::with_lines(&["Line 1"]);
        let cfg = HandlerConfig::with_line("Old Line");

        let outcome = place_call(&provider, &cfg, "12345");

        assert!(matches!(outcome, CallOutcome::Skipped));
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn test_place_call_connect_failure_is_reported_once() {
        // Arrange
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        provider.fail_connects();
        let cfg = HandlerConfig::with_line("SIP Line");

        // Act
        let outcome = place_call(&provider, &cfg, "12345");

        // Assert – one attempt, no retry
        assert!(matches!(outcome, CallOutcome::Failed(TelephonyError::Connect(_))));
        assert_eq!(provider.calls().len(), 1);
        assert!(provider.connects().is_empty());
    }

    #[test]
    fn test_place_call_create_failure_skips_connect() {
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        provider.fail_call_creation();
        let cfg = HandlerConfig::with_line("SIP Line");

        let outcome = place_call(&provider, &cfg, "12345");

        assert!(matches!(outcome, CallOutcome::Failed(TelephonyError::Platform(_))));
        assert!(provider.connects().is_empty());
    }
}
