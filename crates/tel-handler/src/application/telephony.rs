//! Telephony provider capability.
//!
//! The handler needs very little from the telephony stack: a list of named
//! lines, and on a line the ability to create a call and connect it.  These
//! traits describe exactly that.  The TAPI implementation lives in
//! `infrastructure::telephony::windows`; tests use
//! `infrastructure::telephony::mock::MockTelephony`.

use tel_core::match_line_name;
use thiserror::Error;
use tracing::error;

/// Error type for telephony operations.
#[derive(Debug, Error)]
pub enum TelephonyError {
    #[error("telephony provider not initialized")]
    NotInitialized,
    #[error("telephony is not supported on this platform: {0}")]
    Unsupported(String),
    #[error("platform error: {0}")]
    Platform(String),
    #[error("call could not be connected: {0}")]
    Connect(String),
}

/// How the destination passed to [`TelephonyLine::create_call`] is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// A dialable digit string.
    PhoneNumber,
}

/// Media the call is set up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// An ordinary voice call.
    Audio,
}

/// A telephony subsystem exposing named lines.
pub trait TelephonyProvider {
    type Line: TelephonyLine;

    /// Prepares the provider for use.  Called once per process.
    ///
    /// # Errors
    ///
    /// Returns [`TelephonyError`] if the subsystem is unavailable.
    fn initialize(&mut self) -> Result<(), TelephonyError>;

    /// Returns every line the provider currently exposes.
    ///
    /// # Errors
    ///
    /// Returns [`TelephonyError`] if the lines cannot be enumerated.
    fn lines(&self) -> Result<Vec<Self::Line>, TelephonyError>;
}

/// A dialable endpoint (a TAPI *address*).
pub trait TelephonyLine {
    type Call: TelephonyCall;

    /// Provider-assigned, human-readable name.
    fn name(&self) -> &str;

    /// Creates a call to `destination` without connecting it.
    ///
    /// # Errors
    ///
    /// Returns [`TelephonyError`] if the provider refuses to create the call.
    fn create_call(
        &self,
        destination: &str,
        address_type: AddressType,
        media: MediaType,
    ) -> Result<Self::Call, TelephonyError>;
}

/// A call created on a line.
pub trait TelephonyCall {
    /// Starts dialing.  Returns once the provider accepted or rejected it.
    ///
    /// # Errors
    ///
    /// Returns [`TelephonyError::Connect`] if the provider rejects the request.
    fn connect(&mut self) -> Result<(), TelephonyError>;
}

/// Lists the provider's lines, logging and returning an empty list on failure.
pub fn available_lines<P: TelephonyProvider>(provider: &P) -> Vec<P::Line> {
    provider.lines().unwrap_or_else(|e| {
        error!("could not enumerate telephony lines: {e}");
        Vec::new()
    })
}

/// Finds the line named `name`.
pub fn find_line<P: TelephonyProvider>(provider: &P, name: &str) -> Option<P::Line> {
    let mut lines = available_lines(provider);
    match_line_name(lines.iter().map(|l| l.name()), name)
        .index()
        .map(|i| lines.swap_remove(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::telephony::mock::MockTelephony;

    #[test]
    fn test_find_line_returns_named_line() {
        let provider = MockTelephony::with_lines(&["Line 1", "SIP Line"]);
        let line = find_line(&provider, "SIP Line").expect("line must be found");
        assert_eq!(line.name(), "SIP Line");
    }

    #[test]
    fn test_find_line_missing_returns_none() {
        let provider = MockTelephony::with_lines(&["Line 1"]);
        assert!(find_line(&provider, "Old Line").is_none());
    }

    #[test]
    fn test_find_line_enumeration_failure_returns_none() {
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        provider.fail_enumeration();
        assert!(find_line(&provider, "SIP Line").is_none());
    }

    #[test]
    fn test_available_lines_enumeration_failure_is_empty() {
        let provider = MockTelephony::with_lines(&["SIP Line"]);
        provider.fail_enumeration();
        assert!(available_lines(&provider).is_empty());
    }
}
