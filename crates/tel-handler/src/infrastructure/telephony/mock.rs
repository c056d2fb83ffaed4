//! Mock telephony provider for unit testing.
//!
//! # Why a mock provider?
//!
//! The real provider talks to TAPI, which:
//!
//! - Only exists on Windows.
//! - Needs a configured telephony service provider (a SIP softphone, a
//!   desk phone over USB, a PBX driver).
//! - Actually rings somebody when a test connects a call.
//!
//! `MockTelephony` replaces all of that with in-memory recording.  Lines are
//! plain names; every `create_call` and successful `connect` is recorded so
//! tests can assert exactly what would have been dialed.
//!
//! # Usage in tests
//!
//! ```ignore
//! let provider = MockTelephony::with_lines(&["SIP Line"]);
//! let outcome = place_call(&provider, &HandlerConfig::with_line("SIP Line"), "12345");
//!
//! assert_eq!(provider.connects(), vec!["012345".to_string()]);
//! ```
//!
//! # Failure switches
//!
//! `fail_initialization`, `fail_enumeration`, `fail_call_creation` and
//! `fail_connects` make the corresponding step return an error, to exercise
//! the error-handling paths of the use cases.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::telephony::{
    AddressType, MediaType, TelephonyCall, TelephonyError, TelephonyLine, TelephonyProvider,
};

/// A call creation recorded by [`MockTelephony`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    /// Name of the line the call was created on.
    pub line: String,
    /// Destination passed to `create_call` (the full dial string).
    pub destination: String,
    pub address_type: AddressType,
    pub media: MediaType,
}

#[derive(Debug, Default)]
struct Recorder {
    line_names: Vec<String>,
    calls: Vec<CallRequest>,
    connects: Vec<String>,
    initializations: usize,
    enumerations: usize,
    fail_initialization: bool,
    fail_enumeration: bool,
    fail_call_creation: bool,
    fail_connects: bool,
}

/// A telephony provider that records calls instead of placing them.
#[derive(Debug, Default)]
pub struct MockTelephony {
    recorder: Rc<RefCell<Recorder>>,
}

impl MockTelephony {
    /// Creates a provider without lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider exposing lines with the given names, in order.
    pub fn with_lines(names: &[&str]) -> Self {
        let provider = Self::new();
        provider.recorder.borrow_mut().line_names = names.iter().map(|n| n.to_string()).collect();
        provider
    }

    pub fn fail_initialization(&self) {
        self.recorder.borrow_mut().fail_initialization = true;
    }

    pub fn fail_enumeration(&self) {
        self.recorder.borrow_mut().fail_enumeration = true;
    }

    pub fn fail_call_creation(&self) {
        self.recorder.borrow_mut().fail_call_creation = true;
    }

    pub fn fail_connects(&self) {
        self.recorder.borrow_mut().fail_connects = true;
    }

    /// Every `create_call` request, in order.
    pub fn calls(&self) -> Vec<CallRequest> {
        self.recorder.borrow().calls.clone()
    }

    /// Dial strings of every successfully connected call, in order.
    pub fn connects(&self) -> Vec<String> {
        self.recorder.borrow().connects.clone()
    }

    /// How often `initialize` was called.
    pub fn initializations(&self) -> usize {
        self.recorder.borrow().initializations
    }

    /// How often the line list was requested.
    pub fn enumerations(&self) -> usize {
        self.recorder.borrow().enumerations
    }
}

impl TelephonyProvider for MockTelephony {
    type Line = MockLine;

    fn initialize(&mut self) -> Result<(), TelephonyError> {
        let mut rec = self.recorder.borrow_mut();
        rec.initializations += 1;
        if rec.fail_initialization {
            return Err(TelephonyError::Platform("mock initialization failure".into()));
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<MockLine>, TelephonyError> {
        let mut rec = self.recorder.borrow_mut();
        rec.enumerations += 1;
        if rec.fail_enumeration {
            return Err(TelephonyError::Platform("mock enumeration failure".into()));
        }
        Ok(rec
            .line_names
            .iter()
            .map(|name| MockLine {
                name: name.clone(),
                recorder: Rc::clone(&self.recorder),
            })
            .collect())
    }
}

/// A line handed out by [`MockTelephony`].
#[derive(Debug)]
pub struct MockLine {
    name: String,
    recorder: Rc<RefCell<Recorder>>,
}

impl TelephonyLine for MockLine {
    type Call = MockCall;

    fn name(&self) -> &str {
        &self.name
    }

    fn create_call(
        &self,
        destination: &str,
        address_type: AddressType,
        media: MediaType,
    ) -> Result<MockCall, TelephonyError> {
        let mut rec = self.recorder.borrow_mut();
        if rec.fail_call_creation {
            return Err(TelephonyError::Platform("mock call creation failure".into()));
        }
        rec.calls.push(CallRequest {
            line: self.name.clone(),
            destination: destination.to_string(),
            address_type,
            media,
        });
        Ok(MockCall {
            destination: destination.to_string(),
            recorder: Rc::clone(&self.recorder),
        })
    }
}

/// A call created on a [`MockLine`].
#[derive(Debug)]
pub struct MockCall {
    destination: String,
    recorder: Rc<RefCell<Recorder>>,
}

impl TelephonyCall for MockCall {
    fn connect(&mut self) -> Result<(), TelephonyError> {
        let mut rec = self.recorder.borrow_mut();
        if rec.fail_connects {
            return Err(TelephonyError::Connect("mock connect failure".into()));
        }
        rec.connects.push(self.destination.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_lists_lines_in_order() {
        let provider = MockTelephony::with_lines(&["A", "B"]);
        let names: Vec<String> = provider
            .lines()
            .unwrap()
            .iter()
            .map(|l| l.name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(provider.enumerations(), 1);
    }

    #[test]
    fn test_mock_records_call_and_connect() {
        // Arrange
        let provider = MockTelephony::with_lines(&["A"]);
        let line = provider.lines().unwrap().remove(0);

        // Act
        let mut call = line
            .create_call("0123", AddressType::PhoneNumber, MediaType::Audio)
            .unwrap();
        call.connect().unwrap();

        // Assert
        assert_eq!(provider.calls().len(), 1);
        assert_eq!(provider.calls()[0].line, "A");
        assert_eq!(provider.connects(), vec!["0123".to_string()]);
    }

    #[test]
    fn test_mock_initialization_failure() {
        let mut provider = MockTelephony::new();
        provider.fail_initialization();
        assert!(provider.initialize().is_err());
        assert_eq!(provider.initializations(), 1);
    }
}
