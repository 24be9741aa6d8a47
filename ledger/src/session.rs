//! Roles, stored sessions, and the protected-route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role persists two keys: `<role>Token` (bearer token) and `<role>Data`
//! (the signed-in user as JSON). Screens never read those keys directly; they
//! go through [`Session::load`] / [`guard`] so the shape is decoded once and
//! expiry is checked in one place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Portal audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Collector,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Collector => "collector",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Collector => "Collector",
        }
    }

    /// Storage key holding the bearer token.
    #[must_use]
    pub fn token_key(self) -> &'static str {
        match self {
            Self::Customer => "customerToken",
            Self::Collector => "collectorToken",
        }
    }

    /// Storage key holding the signed-in user blob.
    #[must_use]
    pub fn data_key(self) -> &'static str {
        match self {
            Self::Customer => "customerData",
            Self::Collector => "collectorData",
        }
    }

    #[must_use]
    pub fn login_route(self) -> &'static str {
        match self {
            Self::Customer => "/customer/login",
            Self::Collector => "/collector/login",
        }
    }

    #[must_use]
    pub fn home_route(self) -> &'static str {
        match self {
            Self::Customer => "/customer",
            Self::Collector => "/collector",
        }
    }

    /// API path the role's credentials are posted to.
    #[must_use]
    pub fn login_endpoint(self) -> String {
        crate::endpoints::login(self)
    }
}

/// The signed-in user as returned at login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Collection area (collectors only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Savings account the customer withdraws from.
    #[serde(
        default,
        rename = "accountId",
        alias = "account_id",
        deserialize_with = "deserialize_ref_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<String>,
}

/// A role's authenticated session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub role: Role,
    pub token: String,
    pub user: SessionUser,
    /// Expiry instant in milliseconds since the Unix epoch, when known.
    pub expires_at: Option<i64>,
}

/// Shape persisted under `<role>Data`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredUser {
    #[serde(flatten)]
    user: SessionUser,
    #[serde(default, rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    expires_at: Option<i64>,
}

/// Login response body.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, alias = "data")]
    pub user: Option<SessionUser>,
    /// Token lifetime in seconds.
    #[serde(default, rename = "expiresIn")]
    pub expires_in: Option<i64>,
}

impl Session {
    /// Build a session from a successful login body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the token or user is missing.
    pub fn from_login(role: Role, response: LoginResponse, now_ms: i64) -> Result<Self, ApiError> {
        let token = response
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::Decode("login response has no token".to_owned()))?;
        let user = response
            .user
            .ok_or_else(|| ApiError::Decode("login response has no user".to_owned()))?;
        let expires_at = response
            .expires_in
            .map(|secs| now_ms.saturating_add(secs.saturating_mul(1000)));
        Ok(Self { role, token, user, expires_at })
    }

    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at.is_some_and(|at| now_ms >= at)
    }

    /// Read the role's session from `store`.
    ///
    /// Returns `None` when the token is missing or blank, the user blob is
    /// missing or malformed, or the session has expired.
    pub fn load(store: &impl KeyValueStore, role: Role, now_ms: i64) -> Option<Self> {
        let token = store.get(role.token_key()).filter(|t| !t.trim().is_empty())?;
        let raw = store.get(role.data_key())?;
        let Ok(stored) = serde_json::from_str::<StoredUser>(&raw) else {
            return None;
        };
        let session = Self { role, token, user: stored.user, expires_at: stored.expires_at };
        if session.is_expired(now_ms) {
            return None;
        }
        Some(session)
    }

    /// Persist both keys for this session's role.
    pub fn save(&self, store: &impl KeyValueStore) {
        let stored = StoredUser { user: self.user.clone(), expires_at: self.expires_at };
        if let Ok(raw) = serde_json::to_string(&stored) {
            store.set(self.role.token_key(), &self.token);
            store.set(self.role.data_key(), &raw);
        }
    }

    /// Remove both keys for `role`.
    pub fn clear(store: &impl KeyValueStore, role: Role) {
        store.remove(role.token_key());
        store.remove(role.data_key());
    }
}

/// Minimal string key-value persistence (browser `localStorage` in the portal).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used by tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Outcome of checking a protected screen's session.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    Allow(Session),
    /// Navigate to this login route and render nothing protected.
    Redirect(&'static str),
}

impl GuardDecision {
    /// Run `fetch` only when a session is present.
    ///
    /// Returns the redirect route when there is none, in which case `fetch`
    /// is never called.
    pub fn proceed<F: FnOnce(&Session)>(&self, fetch: F) -> Option<&'static str> {
        match self {
            Self::Allow(session) => {
                fetch(session);
                None
            }
            Self::Redirect(route) => Some(route),
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Allow(session) => Some(session),
            Self::Redirect(_) => None,
        }
    }
}

/// Check the stored session for a protected `role` screen.
pub fn guard(store: &impl KeyValueStore, role: Role, now_ms: i64) -> GuardDecision {
    match Session::load(store, role, now_ms) {
        Some(session) => GuardDecision::Allow(session),
        None => GuardDecision::Redirect(role.login_route()),
    }
}

/// Accept either a plain id string or an embedded document carrying `_id`/`id`.
pub(crate) fn ref_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Object(map) => map
            .get("_id")
            .or_else(|| map.get("id"))
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_owned),
        _ => None,
    }
}

fn deserialize_ref_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(ref_id))
}
