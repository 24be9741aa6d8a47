//! REST calls to the savings API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with the
//! role's bearer token. Server-side (SSR): stubs returning
//! [`ApiError::Network`], since these calls only run after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every response body is classified by [`ledger::error::parse_body`]
//! before it is decoded, so pages only ever see an [`ApiError`]. Rejected
//! tokens surface as [`ApiError::Unauthorized`]; callers sign the role out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use ledger::endpoints;
#[cfg(any(test, feature = "hydrate"))]
use ledger::error::parse_body;
#[cfg(feature = "hydrate")]
use ledger::records::{action_message, envelope_data, envelope_rows};
use ledger::review::WithdrawalDesk;
#[cfg(any(test, feature = "hydrate"))]
use ledger::session::LoginResponse;
use ledger::validate::Credentials;
use ledger::{ApiError, Feedback, FeedbackDraft, PaymentsOverview, Role, Session, Withdrawal, WithdrawalRequest};
#[cfg(any(test, feature = "hydrate"))]
use serde_json::Value;

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// On the login form a 401/403 means bad credentials, not an expired session.
#[cfg(any(test, feature = "hydrate"))]
fn login_session(role: Role, status: u16, text: &str, now_ms: i64) -> Result<Session, ApiError> {
    let body = parse_body(status, text).map_err(|err| match err {
        ApiError::Unauthorized(message) => ApiError::Validation(message),
        other => other,
    })?;
    let response: LoginResponse = serde_json::from_value(body)?;
    Session::from_login(role, response, now_ms)
}

/// The withdrawal list arrives either as the envelope's `data` array or bare.
#[cfg(any(test, feature = "hydrate"))]
fn withdrawals_from(body: &Value) -> Vec<Withdrawal> {
    Withdrawal::list_from_value(body.get("data").unwrap_or(body))
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<Value, ApiError> {
    let url = request.url();
    let response = request.send().await.map_err(|e| {
        log::warn!("request to {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    parse_body(status, &text).inspect_err(|e| log::warn!("{url} -> {status}: {e}"))
}

#[cfg(feature = "hydrate")]
fn get(path: &str, token: &str) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::get(path)
        .header("Authorization", &endpoints::bearer(token))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn post<T: serde::Serialize>(path: &str, token: &str, body: &T) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::post(path)
        .header("Authorization", &endpoints::bearer(token))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Sign in as `role` via `POST /api/auth/{role}/login`.
///
/// # Errors
///
/// [`ApiError::Validation`] for rejected credentials, otherwise the
/// transport or server failure.
pub async fn login(role: Role, credentials: &Credentials, now_ms: i64) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = role.login_endpoint();
        let request = gloo_net::http::Request::post(&path)
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let session = login_session(role, status, &text, now_ms)?;
        log::info!("{} signed in", role.as_str());
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, credentials, now_ms);
        Err(unavailable())
    }
}

/// The signed-in collector's feedback history.
///
/// # Errors
///
/// Transport, status, or decode failure.
pub async fn fetch_my_feedback(token: &str) -> Result<Vec<Feedback>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(get(endpoints::MY_FEEDBACK, token)?).await?;
        envelope_rows(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Send a validated feedback draft. Returns the server's confirmation.
///
/// # Errors
///
/// Transport or status failure.
pub async fn submit_feedback(token: &str, draft: &FeedbackDraft) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(post(endpoints::SUBMIT_FEEDBACK, token, draft)?).await?;
        Ok(action_message(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(unavailable())
    }
}

/// Payments overview for `customer_id`.
///
/// # Errors
///
/// Transport, status, or decode failure.
pub async fn fetch_user_payments(token: &str, customer_id: &str) -> Result<PaymentsOverview, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(get(&endpoints::user_payments(customer_id), token)?).await?;
        envelope_data(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, customer_id);
        Err(unavailable())
    }
}

/// File a customer withdrawal request. Returns the server's confirmation.
///
/// # Errors
///
/// Transport or status failure.
pub async fn request_withdrawal(token: &str, request: &WithdrawalRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(post(endpoints::REQUEST_WITHDRAWAL, token, request)?).await?;
        Ok(action_message(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(unavailable())
    }
}

/// Withdrawals visible to the collector, normalized but not yet scoped.
///
/// # Errors
///
/// Transport or status failure.
pub async fn fetch_withdrawals(token: &str) -> Result<Vec<Withdrawal>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send(get(endpoints::COLLECTOR_WITHDRAWALS, token)?).await?;
        Ok(withdrawals_from(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Collector review calls bound to one bearer token.
#[derive(Clone, Debug)]
pub struct HttpDesk {
    token: String,
}

impl HttpDesk {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl WithdrawalDesk for HttpDesk {
    async fn list_withdrawals(&self) -> Result<Vec<Withdrawal>, ApiError> {
        fetch_withdrawals(&self.token).await
    }

    async fn approve_withdrawal(&self, withdrawal_id: &str) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let path = endpoints::approve_withdrawal(withdrawal_id);
            let body = send(post(&path, &self.token, &serde_json::json!({}))?).await?;
            Ok(action_message(&body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = withdrawal_id;
            Err(unavailable())
        }
    }

    async fn reject_withdrawal(&self, withdrawal_id: &str, reason: &str) -> Result<Option<String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let path = endpoints::reject_withdrawal(withdrawal_id);
            let body = send(post(&path, &self.token, &serde_json::json!({ "reason": reason }))?).await?;
            Ok(action_message(&body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (withdrawal_id, reason);
            Err(unavailable())
        }
    }
}
