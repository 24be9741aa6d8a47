//! REST paths of the external savings API.
//!
//! Paths are relative; the browser resolves them against its own origin
//! (where the portal server proxies `/api`) and the CLI prefixes its
//! configured base URL.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::session::Role;

pub const MY_FEEDBACK: &str = "/api/feedback/collector/my-feedback";
pub const SUBMIT_FEEDBACK: &str = "/api/feedback/collector/submit";
pub const REQUEST_WITHDRAWAL: &str = "/api/payments/withdraw";
pub const COLLECTOR_WITHDRAWALS: &str = "/api/payments/withdrawals";

/// Login endpoint for `role`.
#[must_use]
pub fn login(role: Role) -> String {
    format!("/api/auth/{}/login", role.as_str())
}

/// Payments overview for one customer.
#[must_use]
pub fn user_payments(customer_id: &str) -> String {
    format!("/api/payments/getuserpayments/{customer_id}")
}

#[must_use]
pub fn approve_withdrawal(withdrawal_id: &str) -> String {
    format!("{COLLECTOR_WITHDRAWALS}/{withdrawal_id}/approve")
}

#[must_use]
pub fn reject_withdrawal(withdrawal_id: &str) -> String {
    format!("{COLLECTOR_WITHDRAWALS}/{withdrawal_id}/reject")
}

/// Join a base URL and an API path without doubling the slash.
#[must_use]
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// `Authorization` header value for a session token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
