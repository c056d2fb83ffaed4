//! Recording [`UserNotifier`] for tests.
//!
//! Every notice is kept in order.  Yes/no questions are answered from a
//! scripted queue; once the queue is empty every further question is
//! answered "no", which is also what a user closing the dialog would do.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::application::notify::{Notice, NotifyError, UserNotifier};

#[derive(Debug, Default)]
pub struct MockNotifier {
    informed: RefCell<Vec<Notice>>,
    asked: RefCell<Vec<Notice>>,
    answers: RefCell<VecDeque<bool>>,
}

impl MockNotifier {
    /// A notifier that answers every question "no".
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that answers questions with `answers`, in order.
    pub fn answering(answers: Vec<bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            ..Self::default()
        }
    }

    /// Acknowledge-only notices shown so far.
    pub fn informed(&self) -> Vec<Notice> {
        self.informed.borrow().clone()
    }

    /// Yes/no questions asked so far.
    pub fn asked(&self) -> Vec<Notice> {
        self.asked.borrow().clone()
    }
}

impl UserNotifier for MockNotifier {
    fn inform(&self, notice: &Notice) -> Result<(), NotifyError> {
        self.informed.borrow_mut().push(notice.clone());
        Ok(())
    }

    fn confirm(&self, notice: &Notice) -> Result<bool, NotifyError> {
        self.asked.borrow_mut().push(notice.clone());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or(false))
    }
}
