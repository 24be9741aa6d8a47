//! Shared session-guard and sign-out helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies the same redirect rule and the same handling
//! of rejected tokens, so both live here rather than in each page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use ledger::{ApiError, Role, Session};

use crate::state::session::SessionState;
use crate::util::storage::BrowserStore;

/// Wall-clock milliseconds since the Unix epoch (0 during SSR).
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Guard a protected screen: navigate to the role's login route whenever
/// storage has been read and the role has no live session, otherwise call
/// `on_allow` once for this mount.
pub fn install_session_guard<F, A>(role: Role, sessions: RwSignal<SessionState>, navigate: F, on_allow: A)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    A: Fn(&Session) + 'static,
{
    let allowed = RwSignal::new(false);
    Effect::new(move || {
        let Some(decision) = sessions.with(|s| s.decision(role, now_ms())) else {
            return;
        };
        let first = !allowed.get_untracked();
        let redirect = decision.proceed(|session| {
            if first {
                allowed.set(true);
                on_allow(session);
            }
        });
        if let Some(route) = redirect {
            allowed.set(false);
            navigate(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// The role's bearer token and user id, if signed in.
pub fn credentials(sessions: RwSignal<SessionState>, role: Role) -> Option<(String, String)> {
    sessions.with_untracked(|s| {
        s.active(role, now_ms())
            .map(|session| (session.token.clone(), session.user.id.clone()))
    })
}

/// Clear the role's stored session. The page guard then redirects.
pub fn sign_out(sessions: RwSignal<SessionState>, role: Role) {
    sessions.update(|s| s.sign_out(&BrowserStore, role));
}

/// Route a failed call: rejected tokens sign the role out (the guard
/// redirects) and yield `None`; anything else yields the banner message.
pub fn handle_failure(sessions: RwSignal<SessionState>, role: Role, err: &ApiError) -> Option<String> {
    let message = failure_message(err);
    if message.is_none() {
        sign_out(sessions, role);
    }
    message
}

/// Banner text for `err`, or `None` when it should end the session instead.
pub fn failure_message(err: &ApiError) -> Option<String> {
    if err.is_unauthorized() {
        None
    } else {
        Some(err.user_message())
    }
}
