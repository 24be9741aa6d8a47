//! Approve/reject dispatch for the collector withdrawal queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal (gloo-net) and the CLI (reqwest) both implement
//! [`WithdrawalDesk`]; [`submit_review`] is the shared flow: validate, issue
//! exactly one action call, and on success re-fetch the list exactly once.
//! [`ReviewTracker`] holds the per-row processing flags that stop a second
//! dispatch on a row whose first one is still in flight.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use std::collections::BTreeSet;
use std::future::Future;

use crate::error::ApiError;
use crate::records::Withdrawal;
use crate::validate::validate_rejection_reason;

/// What the collector decided for one withdrawal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject { reason: String },
}

impl Decision {
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject { .. } => "reject",
        }
    }

    /// Text for the native confirm dialog.
    #[must_use]
    pub fn confirm_prompt(&self, withdrawal: &Withdrawal) -> String {
        let who = withdrawal.customer_name.as_deref().unwrap_or("this customer");
        format!("Are you sure you want to {} the withdrawal of {:.2} for {who}?", self.verb(), withdrawal.amount)
    }

    fn fallback_message(&self) -> &'static str {
        match self {
            Self::Approve => "Withdrawal approved.",
            Self::Reject { .. } => "Withdrawal rejected.",
        }
    }
}

/// Transport for the collector withdrawal endpoints.
pub trait WithdrawalDesk {
    /// Fetch the (normalized, not yet collector-scoped) withdrawal list.
    fn list_withdrawals(&self) -> impl Future<Output = Result<Vec<Withdrawal>, ApiError>>;

    /// Returns the server's confirmation message, if it sent one.
    fn approve_withdrawal(&self, withdrawal_id: &str) -> impl Future<Output = Result<Option<String>, ApiError>>;

    fn reject_withdrawal(
        &self,
        withdrawal_id: &str,
        reason: &str,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;
}

/// Result of a successful approve/reject call.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewReceipt {
    /// Confirmation to show the collector.
    pub message: String,
    /// The single re-fetch issued after the action.
    pub refreshed: Result<Vec<Withdrawal>, ApiError>,
}

/// Validate `decision`, send it, and re-fetch the list once on success.
///
/// # Errors
///
/// [`ApiError::Validation`] (no request made) for a short rejection reason,
/// or the action call's own error (no re-fetch made).
pub async fn submit_review<D: WithdrawalDesk>(
    desk: &D,
    withdrawal_id: &str,
    decision: &Decision,
) -> Result<ReviewReceipt, ApiError> {
    let confirmation = match decision {
        Decision::Approve => desk.approve_withdrawal(withdrawal_id).await?,
        Decision::Reject { reason } => {
            let reason = validate_rejection_reason(reason)?;
            desk.reject_withdrawal(withdrawal_id, &reason).await?
        }
    };
    let message = confirmation.unwrap_or_else(|| decision.fallback_message().to_owned());
    let refreshed = desk.list_withdrawals().await;
    Ok(ReviewReceipt { message, refreshed })
}

/// Per-row "processing" flags keyed by withdrawal id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewTracker {
    processing: BTreeSet<String>,
}

impl ReviewTracker {
    /// Mark `withdrawal_id` busy. Returns `false` if it already was.
    pub fn begin(&mut self, withdrawal_id: &str) -> bool {
        self.processing.insert(withdrawal_id.to_owned())
    }

    /// Return `withdrawal_id` to idle, whatever the outcome.
    pub fn finish(&mut self, withdrawal_id: &str) {
        self.processing.remove(withdrawal_id);
    }

    #[must_use]
    pub fn is_processing(&self, withdrawal_id: &str) -> bool {
        self.processing.contains(withdrawal_id)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.processing.is_empty()
    }
}
