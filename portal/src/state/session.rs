//! Signed-in sessions for both portal roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<SessionState>` from the app root. It is
//! restored from browser storage after hydration; screens read tokens from
//! here instead of touching storage, and every sign-in/sign-out goes through
//! the methods below so storage and memory never disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use ledger::{GuardDecision, KeyValueStore, Role, Session};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub customer: Option<Session>,
    pub collector: Option<Session>,
    /// Storage has been read. Guards never redirect before this.
    pub restored: bool,
}

impl SessionState {
    /// Read both roles' sessions from `store`.
    pub fn restore(store: &impl KeyValueStore, now_ms: i64) -> Self {
        Self {
            customer: Session::load(store, Role::Customer, now_ms),
            collector: Session::load(store, Role::Collector, now_ms),
            restored: true,
        }
    }

    #[must_use]
    pub fn get(&self, role: Role) -> Option<&Session> {
        match role {
            Role::Customer => self.customer.as_ref(),
            Role::Collector => self.collector.as_ref(),
        }
    }

    /// The role's session if present and not expired at `now_ms`.
    #[must_use]
    pub fn active(&self, role: Role, now_ms: i64) -> Option<&Session> {
        self.get(role).filter(|s| !s.is_expired(now_ms))
    }

    fn slot(&mut self, role: Role) -> &mut Option<Session> {
        match role {
            Role::Customer => &mut self.customer,
            Role::Collector => &mut self.collector,
        }
    }

    pub fn sign_in(&mut self, store: &impl KeyValueStore, session: Session) {
        session.save(store);
        let role = session.role;
        *self.slot(role) = Some(session);
        self.restored = true;
    }

    pub fn sign_out(&mut self, store: &impl KeyValueStore, role: Role) {
        Session::clear(store, role);
        *self.slot(role) = None;
    }

    /// Guard outcome for a protected `role` screen, or `None` while storage
    /// has not been read yet.
    #[must_use]
    pub fn decision(&self, role: Role, now_ms: i64) -> Option<GuardDecision> {
        if !self.restored {
            return None;
        }
        Some(match self.active(role, now_ms) {
            Some(session) => GuardDecision::Allow(session.clone()),
            None => GuardDecision::Redirect(role.login_route()),
        })
    }

    /// Login route to navigate to, once storage has been read and the role
    /// has no live session.
    #[must_use]
    pub fn redirect_for(&self, role: Role, now_ms: i64) -> Option<&'static str> {
        match self.decision(role, now_ms)? {
            GuardDecision::Allow(_) => None,
            GuardDecision::Redirect(route) => Some(route),
        }
    }
}
