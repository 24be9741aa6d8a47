//! Client-side input checks.
//!
//! Every check runs before a request is built; a failure never reaches the
//! network. Messages are shown to the user as-is.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use serde::Serialize;

use crate::error::ApiError;
use crate::records::{FeedbackCategory, FeedbackDraft, Rating, WithdrawalRequest};

pub const MIN_REJECTION_REASON_CHARS: usize = 5;
pub const MAX_FEEDBACK_CHARS: usize = 1000;

/// `POST /api/auth/{role}/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_owned())
}

/// A rejection needs a reason of at least five characters.
///
/// # Errors
///
/// [`ApiError::Validation`] when the trimmed reason is too short.
pub fn validate_rejection_reason(reason: &str) -> Result<String, ApiError> {
    let reason = reason.trim();
    if reason.chars().count() < MIN_REJECTION_REASON_CHARS {
        return Err(ApiError::Validation(format!(
            "Please give a reason of at least {MIN_REJECTION_REASON_CHARS} characters."
        )));
    }
    Ok(reason.to_owned())
}

/// # Errors
///
/// [`ApiError::Validation`] for an empty or oversized message, a rating
/// outside 1–5, or an unselected category.
pub fn validate_feedback(message: &str, rating: u8, category: FeedbackCategory) -> Result<FeedbackDraft, ApiError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(invalid("Please enter your feedback."));
    }
    if message.chars().count() > MAX_FEEDBACK_CHARS {
        return Err(ApiError::Validation(format!(
            "Feedback must be at most {MAX_FEEDBACK_CHARS} characters."
        )));
    }
    let rating = Rating::try_from(rating).map_err(ApiError::Validation)?;
    if category == FeedbackCategory::Other {
        return Err(invalid("Please choose a category."));
    }
    Ok(FeedbackDraft { message: message.to_owned(), rating, category })
}

/// Parse and check a customer withdrawal request. Balances are the
/// server's business; only the amount's shape is checked here.
///
/// # Errors
///
/// [`ApiError::Validation`] for a non-positive or unparsable amount, an empty
/// reason, or a session without an account.
pub fn validate_withdrawal_request(
    amount: &str,
    reason: &str,
    account_id: Option<&str>,
) -> Result<WithdrawalRequest, ApiError> {
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("Enter a valid amount."))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(invalid("Amount must be greater than zero."));
    }
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(invalid("Please tell us why you are withdrawing."));
    }
    let account_id = account_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| invalid("No savings account is linked to this login."))?;
    Ok(WithdrawalRequest { amount, reason: reason.to_owned(), account_id: account_id.to_owned() })
}

/// # Errors
///
/// [`ApiError::Validation`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(invalid("Enter both email and password."));
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}
