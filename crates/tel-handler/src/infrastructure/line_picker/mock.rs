//! Scripted [`LinePicker`] for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::application::select_line::{LinePicker, LineSelection, PickerError};

/// Returns queued selections; an exhausted queue behaves like "cancel".
#[derive(Debug, Default)]
pub struct MockLinePicker {
    selections: RefCell<VecDeque<LineSelection>>,
    shown: RefCell<Vec<(String, Vec<String>)>>,
    broken: bool,
}

impl MockLinePicker {
    pub fn answering(selections: Vec<LineSelection>) -> Self {
        Self {
            selections: RefCell::new(selections.into()),
            ..Self::default()
        }
    }

    /// A picker whose every `pick` fails.
    pub fn failing() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    /// `(current, available)` of every time the picker was shown.
    pub fn shown(&self) -> Vec<(String, Vec<String>)> {
        self.shown.borrow().clone()
    }
}

impl LinePicker for MockLinePicker {
    fn pick(&self, current: &str, available: &[String]) -> Result<LineSelection, PickerError> {
        if self.broken {
            return Err(PickerError::Platform("mock picker failure".into()));
        }
        self.shown
            .borrow_mut()
            .push((current.to_string(), available.to_vec()));
        Ok(self
            .selections
            .borrow_mut()
            .pop_front()
            .unwrap_or(LineSelection::Cancelled))
    }
}
