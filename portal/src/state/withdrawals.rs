//! Collector withdrawal queue state.
//!
//! DESIGN
//! ======
//! The list is always stored already scoped to the signed-in collector, so
//! rendering never repeats the ownership check. Review outcomes funnel through
//! [`WithdrawalsState::apply_review`], which is the only place a row's
//! processing flag is cleared.

#[cfg(test)]
#[path = "withdrawals_test.rs"]
mod withdrawals_test;

use ledger::filter::apply_query;
use ledger::records::for_collector;
use ledger::review::{ReviewReceipt, ReviewTracker};
use ledger::{ApiError, ListQuery, TxStatus, Withdrawal};

use crate::util::auth::failure_message;

#[derive(Clone, Debug, Default)]
pub struct WithdrawalsState {
    pub items: Vec<Withdrawal>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: ListQuery<TxStatus>,
    pub tracker: ReviewTracker,
}

/// What the page must do after a review call settles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewEffect {
    /// Text for the native alert.
    pub alert: Option<String>,
    /// The token was rejected; sign the collector out.
    pub sign_out: bool,
}

impl WithdrawalsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a fresh list, keeping only `collector_id`'s withdrawals.
    pub fn loaded(&mut self, collector_id: &str, items: Vec<Withdrawal>) {
        self.items = for_collector(items, collector_id);
        self.loading = false;
        self.error = None;
    }

    /// `message` is `None` when the failure ended the session.
    pub fn failed(&mut self, message: Option<String>) {
        self.loading = false;
        self.error = message;
    }

    pub fn visible(&self) -> Vec<Withdrawal> {
        apply_query(&self.items, &self.query).into_iter().cloned().collect()
    }

    pub fn pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|w| w.status == TxStatus::Pending)
            .count()
    }

    pub fn find(&self, withdrawal_id: &str) -> Option<Withdrawal> {
        self.items.iter().find(|w| w.id == withdrawal_id).cloned()
    }

    pub fn is_processing(&self, withdrawal_id: &str) -> bool {
        self.tracker.is_processing(withdrawal_id)
    }

    /// Mark the row busy; `false` means a review for it is already in flight.
    pub fn begin_review(&mut self, withdrawal_id: &str) -> bool {
        self.tracker.begin(withdrawal_id)
    }

    /// Settle a review: the row always returns to idle, a successful call
    /// replaces the list with its single re-fetch.
    pub fn apply_review(
        &mut self,
        withdrawal_id: &str,
        collector_id: &str,
        result: Result<ReviewReceipt, ApiError>,
    ) -> ReviewEffect {
        self.tracker.finish(withdrawal_id);
        match result {
            Ok(ReviewReceipt { message, refreshed }) => {
                let mut effect = ReviewEffect { alert: Some(message), sign_out: false };
                match refreshed {
                    Ok(items) => self.loaded(collector_id, items),
                    Err(err) => {
                        let banner = failure_message(&err);
                        effect.sign_out = banner.is_none();
                        self.failed(banner);
                    }
                }
                effect
            }
            Err(err) => match failure_message(&err) {
                Some(message) => ReviewEffect { alert: Some(message), sign_out: false },
                None => ReviewEffect { alert: None, sign_out: true },
            },
        }
    }
}
