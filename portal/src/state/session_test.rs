use super::*;
use ledger::{MemoryStore, SessionUser};

fn session(role: Role, expires_at: Option<i64>) -> Session {
    Session {
        role,
        token: format!("{}-token", role.as_str()),
        user: SessionUser { id: "u1".to_owned(), name: "Asha".to_owned(), area: None, account_id: Some("acc1".to_owned()) },
        expires_at,
    }
}

// =============================================================
// Defaults / restore
// =============================================================

#[test]
fn default_state_is_not_restored_and_never_redirects() {
    let state = SessionState::default();
    assert!(!state.restored);
    assert_eq!(state.redirect_for(Role::Collector, 0), None);
}

#[test]
fn restore_from_empty_store_redirects_both_roles() {
    let state = SessionState::restore(&MemoryStore::new(), 0);
    assert!(state.restored);
    assert_eq!(state.redirect_for(Role::Customer, 0), Some("/customer/login"));
    assert_eq!(state.redirect_for(Role::Collector, 0), Some("/collector/login"));
}

#[test]
fn restore_reads_each_role_independently() {
    let store = MemoryStore::new();
    session(Role::Customer, None).save(&store);
    let state = SessionState::restore(&store, 0);
    assert_eq!(state.get(Role::Customer).map(|s| s.token.as_str()), Some("customer-token"));
    assert!(state.get(Role::Collector).is_none());
    assert_eq!(state.redirect_for(Role::Customer, 0), None);
}

// =============================================================
// Sign in / out
// =============================================================

#[test]
fn sign_in_persists_and_sign_out_clears() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();

    state.sign_in(&store, session(Role::Collector, None));
    assert!(state.restored);
    assert_eq!(store.get("collectorToken").as_deref(), Some("collector-token"));
    assert_eq!(state.redirect_for(Role::Collector, 0), None);

    state.sign_out(&store, Role::Collector);
    assert!(store.is_empty());
    assert_eq!(state.redirect_for(Role::Collector, 0), Some("/collector/login"));
}

#[test]
fn sign_out_leaves_other_role_alone() {
    let store = MemoryStore::new();
    let mut state = SessionState::default();
    state.sign_in(&store, session(Role::Customer, None));
    state.sign_in(&store, session(Role::Collector, None));
    state.sign_out(&store, Role::Collector);
    assert!(state.get(Role::Customer).is_some());
    assert_eq!(store.get("customerToken").as_deref(), Some("customer-token"));
}

#[test]
fn expired_session_redirects() {
    let mut state = SessionState::default();
    state.sign_in(&MemoryStore::new(), session(Role::Customer, Some(5_000)));
    assert!(state.active(Role::Customer, 4_999).is_some());
    assert_eq!(state.redirect_for(Role::Customer, 5_000), Some("/customer/login"));
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn decision_waits_for_restore() {
    let state = SessionState::default();
    assert_eq!(state.decision(Role::Customer, 0), None);
}

#[test]
fn decision_allows_live_session_and_runs_fetch_once() {
    let mut state = SessionState::default();
    state.sign_in(&MemoryStore::new(), session(Role::Customer, None));
    let decision = state.decision(Role::Customer, 0).unwrap();
    let mut fetched = Vec::new();
    assert_eq!(decision.proceed(|s| fetched.push(s.user.id.clone())), None);
    assert_eq!(fetched, vec!["u1".to_owned()]);
}

#[test]
fn decision_without_token_redirects_and_skips_fetch() {
    let state = SessionState::restore(&MemoryStore::new(), 0);
    let decision = state.decision(Role::Collector, 0).unwrap();
    let mut called = false;
    assert_eq!(decision.proceed(|_| called = true), Some("/collector/login"));
    assert!(!called);
}
