#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use config::{ConfigError, ServerConfig};

/// Reasons the server can fail to come up.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("upstream HTTP client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("listener failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    let state = state::AppState::new(config.clone())?;
    let app = routes::app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        port = config.port,
        backend = %config.backend_url,
        timeout_secs = config.proxy_timeout_secs,
        "savings portal listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
