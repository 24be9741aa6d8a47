//! Dialog visibility for both dashboards.
//!
//! Each dialog is either closed or open; the detail and reject dialogs also
//! remember which record they target. Opening one dialog closes the others.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub feedback_modal_open: bool,
    pub withdraw_modal_open: bool,
    /// Transaction shown in the detail dialog.
    pub detail_transaction: Option<String>,
    /// Withdrawal awaiting a rejection reason.
    pub reject_target: Option<String>,
}

impl UiState {
    pub fn open_feedback(&mut self) {
        self.close_all();
        self.feedback_modal_open = true;
    }

    pub fn open_withdraw(&mut self) {
        self.close_all();
        self.withdraw_modal_open = true;
    }

    pub fn open_detail(&mut self, transaction_id: &str) {
        self.close_all();
        self.detail_transaction = Some(transaction_id.to_owned());
    }

    pub fn open_reject(&mut self, withdrawal_id: &str) {
        self.close_all();
        self.reject_target = Some(withdrawal_id.to_owned());
    }

    pub fn close_feedback(&mut self) {
        self.feedback_modal_open = false;
    }

    pub fn close_withdraw(&mut self) {
        self.withdraw_modal_open = false;
    }

    pub fn close_detail(&mut self) {
        self.detail_transaction = None;
    }

    pub fn close_reject(&mut self) {
        self.reject_target = None;
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    pub fn any_open(&self) -> bool {
        self.feedback_modal_open
            || self.withdraw_modal_open
            || self.detail_transaction.is_some()
            || self.reject_target.is_some()
    }
}
