//! API failure classification.
//!
//! DESIGN
//! ======
//! Only two failure families matter to the screens: authentication failures
//! (hard redirect to login, stored session cleared) and everything else
//! (flat message + retry). [`ApiError`] keeps a little more detail than that
//! so the CLI and logs can say what went wrong.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Message shown when the server gave no usable explanation.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Error returned by every API helper.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Token missing, expired, or rejected by the server (HTTP 401/403).
    #[error("session expired: {0}")]
    Unauthorized(String),
    /// Input rejected client-side before any request was made.
    #[error("{0}")]
    Validation(String),
    /// The server answered with a failure status or `success: false`.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this failure should clear the session and redirect to login.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Flat human-readable message for banners and alerts.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(_) => "Your session has expired. Please log in again.".to_owned(),
            Self::Validation(message) | Self::Server { message, .. } => message.clone(),
            Self::Network(_) => "Unable to reach the server. Check your connection and retry.".to_owned(),
            Self::Decode(_) => GENERIC_FAILURE.to_owned(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Extract the server's explanation from a JSON body (`message`, then `error`).
#[must_use]
pub fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_owned)
}

/// Classify an HTTP response.
///
/// # Errors
///
/// - 401/403 → [`ApiError::Unauthorized`]
/// - any other non-2xx status → [`ApiError::Server`]
/// - a 2xx body carrying `"success": false` → [`ApiError::Server`]
pub fn check_response(status: u16, body: &Value) -> Result<(), ApiError> {
    let message = || server_message(body).unwrap_or_else(|| GENERIC_FAILURE.to_owned());
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized(message()));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Server { status, message: message() });
    }
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Server { status, message: message() });
    }
    Ok(())
}

/// Parse a raw response body and classify it. The status is checked first, so
/// an HTML error page from a proxy still yields the right variant.
///
/// # Errors
///
/// The [`check_response`] classification, or [`ApiError::Decode`] for a
/// successful status whose body is not JSON.
pub fn parse_body(status: u16, text: &str) -> Result<Value, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        check_response(status, &Value::Null)?;
        return Ok(Value::Null);
    }
    match serde_json::from_str::<Value>(text) {
        Ok(body) => {
            check_response(status, &body)?;
            Ok(body)
        }
        Err(err) => {
            check_response(status, &Value::Null)?;
            Err(err.into())
        }
    }
}
