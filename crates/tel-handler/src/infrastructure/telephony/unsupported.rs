//! Placeholder provider for platforms without a telephony binding.
//!
//! `initialize` fails, so the handler tells the user and exits before any
//! configuration or dialing happens.

use crate::application::telephony::{
    AddressType, MediaType, TelephonyCall, TelephonyError, TelephonyLine, TelephonyProvider,
};

/// A provider that exposes no lines and cannot be initialised.
#[derive(Debug, Default)]
pub struct UnsupportedTelephony;

impl UnsupportedTelephony {
    pub fn new() -> Self {
        Self
    }
}

/// Uninhabited line type: this provider never yields a line.
#[derive(Debug)]
pub enum NoLine {}

/// Uninhabited call type.
#[derive(Debug)]
pub enum NoCall {}

impl TelephonyProvider for UnsupportedTelephony {
    type Line = NoLine;

    fn initialize(&mut self) -> Result<(), TelephonyError> {
        Err(TelephonyError::Unsupported(std::env::consts::OS.to_string()))
    }

    fn lines(&self) -> Result<Vec<NoLine>, TelephonyError> {
        Ok(Vec::new())
    }
}

impl TelephonyLine for NoLine {
    type Call = NoCall;

    fn name(&self) -> &str {
        match *self {}
    }

    fn create_call(&self, _: &str, _: AddressType, _: MediaType) -> Result<NoCall, TelephonyError> {
        match *self {}
    }
}

impl TelephonyCall for NoCall {
    fn connect(&mut self) -> Result<(), TelephonyError> {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_reports_unsupported_platform() {
        let mut provider = UnsupportedTelephony::new();
        assert!(matches!(provider.initialize(), Err(TelephonyError::Unsupported(_))));
    }

    #[test]
    fn test_lines_is_empty() {
        assert!(UnsupportedTelephony::new().lines().unwrap().is_empty());
    }
}
