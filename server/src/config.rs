//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing config: env var {var} not set")]
    Missing { var: &'static str },

    /// A variable is set but cannot be used.
    #[error("invalid config: {var}={value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Savings API origin, without a trailing slash.
    pub backend_url: String,
    pub proxy_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `PORTAL_BACKEND_URL`: `http(s)://` origin of the savings API
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTAL_PROXY_TIMEOUT_SECS`: default 30
    /// - `PORTAL_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for a missing backend URL or an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("PORTAL_BACKEND_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing { var: "PORTAL_BACKEND_URL" })?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "PORTAL_BACKEND_URL", value: backend_url });
        }

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            backend_url,
            proxy_timeout_secs: parse_or(&lookup, "PORTAL_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_or(&lookup, "PORTAL_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
