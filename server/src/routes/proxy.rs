//! `/api/*` reverse proxy to the savings backend.
//!
//! Method, path, query, body and end-to-end headers (including the bearer
//! token) pass through unchanged; the upstream status and body come back
//! unchanged too, so the browser classifies responses exactly as if it had
//! called the backend directly. Only transport failures are answered here,
//! with the backend's own `{ success: false, message }` envelope shape.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Instant;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream timed out")]
    Timeout,

    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream body read failed: {0}")]
    Body(String),
}

impl ProxyError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => "The savings service took too long to respond. Please retry.",
            Self::Unreachable(_) | Self::Body(_) => "The savings service is unavailable. Please retry.",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        let body = serde_json::json!({ "success": false, "message": self.user_message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Backend URL for an incoming `/api/...` request, query string included.
pub(crate) fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    ledger::endpoints::join(backend_url, path)
}

/// Connection-scoped headers (RFC 9110 §7.6.1) and the ones the HTTP client
/// recomputes are not forwarded.
pub(crate) fn forwardable(name: &HeaderName) -> bool {
    let skipped = [
        header::CONNECTION,
        header::HOST,
        header::CONTENT_LENGTH,
        header::TRANSFER_ENCODING,
        header::TE,
        header::TRAILER,
        header::UPGRADE,
        header::PROXY_AUTHENTICATE,
        header::PROXY_AUTHORIZATION,
    ];
    !skipped.contains(name) && name.as_str() != "keep-alive"
}

pub(crate) fn copy_headers(source: &HeaderMap) -> HeaderMap {
    source
        .iter()
        .filter(|(name, _)| forwardable(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}`: forward one request upstream and relay the answer.
///
/// # Errors
///
/// [`ProxyError`] when the backend cannot be reached or its body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.backend_url, &uri);
    let started = Instant::now();

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(ProxyError::from_reqwest)?;

    let status = upstream.status();
    let response_headers = copy_headers(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::info!(
        %method,
        path = uri.path(),
        status = status.as_u16(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "proxied"
    );

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
