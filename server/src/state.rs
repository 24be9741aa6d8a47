//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled `reqwest` client for every proxied
//! request, so upstream connections are reused.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
