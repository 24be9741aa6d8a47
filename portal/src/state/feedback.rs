//! Collector feedback history state.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use ledger::filter::apply_query;
use ledger::{Feedback, FeedbackStatus, ListQuery};

#[derive(Clone, Debug, Default)]
pub struct FeedbackState {
    pub items: Vec<Feedback>,
    pub loading: bool,
    pub error: Option<String>,
    pub submitting: bool,
    pub query: ListQuery<FeedbackStatus>,
}

impl FeedbackState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<Feedback>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// `message` is `None` when the failure ended the session.
    pub fn failed(&mut self, message: Option<String>) {
        self.loading = false;
        self.error = message;
    }

    pub fn visible(&self) -> Vec<Feedback> {
        apply_query(&self.items, &self.query).into_iter().cloned().collect()
    }

    /// Number of entries with `status`.
    pub fn count(&self, status: FeedbackStatus) -> usize {
        self.items.iter().filter(|f| f.status == status).count()
    }
}
