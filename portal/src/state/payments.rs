//! Customer payments overview state.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use ledger::filter::apply_query;
use ledger::{ListQuery, PaymentSummary, PaymentsOverview, Transaction, TxStatus};

/// Which transaction list the customer is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransactionTab {
    #[default]
    All,
    Payments,
    Withdrawals,
}

impl TransactionTab {
    pub const ALL: [Self; 3] = [Self::All, Self::Payments, Self::Withdrawals];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Payments => "Payments",
            Self::Withdrawals => "Withdrawals",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PaymentsState {
    pub overview: Option<PaymentsOverview>,
    pub loading: bool,
    pub error: Option<String>,
    pub tab: TransactionTab,
    pub query: ListQuery<TxStatus>,
    pub submitting_withdrawal: bool,
}

impl PaymentsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, overview: PaymentsOverview) {
        self.overview = Some(overview);
        self.loading = false;
        self.error = None;
    }

    /// `message` is `None` when the failure ended the session.
    pub fn failed(&mut self, message: Option<String>) {
        self.loading = false;
        self.error = message;
    }

    pub fn summary(&self) -> PaymentSummary {
        self.overview
            .as_ref()
            .map(|o| o.summary.clone())
            .unwrap_or_default()
    }

    fn tab_items(&self) -> &[Transaction] {
        let Some(overview) = self.overview.as_ref() else {
            return &[];
        };
        match self.tab {
            TransactionTab::All => &overview.all_transactions,
            TransactionTab::Payments => &overview.payments,
            TransactionTab::Withdrawals => &overview.withdrawals,
        }
    }

    /// Current tab filtered by the search box and status select.
    pub fn visible(&self) -> Vec<Transaction> {
        apply_query(self.tab_items(), &self.query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Look a transaction up in any of the three tabs.
    pub fn find(&self, transaction_id: &str) -> Option<Transaction> {
        let overview = self.overview.as_ref()?;
        overview
            .all_transactions
            .iter()
            .chain(&overview.payments)
            .chain(&overview.withdrawals)
            .find(|t| t.id == transaction_id)
            .cloned()
    }
}
