use super::*;
use serde_json::json;

fn collector_session() -> Session {
    Session {
        role: Role::Collector,
        token: "tok-1".to_owned(),
        user: SessionUser {
            id: "c1".to_owned(),
            name: "Ravi".to_owned(),
            area: Some("North".to_owned()),
            account_id: None,
        },
        expires_at: None,
    }
}

// =============================================================
// Role keys and routes
// =============================================================

#[test]
fn role_storage_keys_follow_role_prefix() {
    assert_eq!(Role::Customer.token_key(), "customerToken");
    assert_eq!(Role::Customer.data_key(), "customerData");
    assert_eq!(Role::Collector.token_key(), "collectorToken");
    assert_eq!(Role::Collector.data_key(), "collectorData");
}

#[test]
fn role_routes() {
    assert_eq!(Role::Customer.login_route(), "/customer/login");
    assert_eq!(Role::Collector.login_route(), "/collector/login");
    assert_eq!(Role::Customer.home_route(), "/customer");
    assert_eq!(Role::Collector.home_route(), "/collector");
    assert_eq!(Role::Customer.login_endpoint(), "/api/auth/customer/login");
    assert_eq!(Role::Collector.login_endpoint(), "/api/auth/collector/login");
}

// =============================================================
// Load / save / clear
// =============================================================

#[test]
fn save_then_load_restores_session() {
    let store = MemoryStore::new();
    let session = collector_session();
    session.save(&store);
    assert_eq!(store.len(), 2);
    assert_eq!(Session::load(&store, Role::Collector, 0), Some(session));
}

#[test]
fn load_without_token_is_none() {
    let store = MemoryStore::new();
    store.set("collectorData", r#"{"_id":"c1","name":"Ravi"}"#);
    assert_eq!(Session::load(&store, Role::Collector, 0), None);
}

#[test]
fn load_with_blank_token_is_none() {
    let store = MemoryStore::new();
    store.set("collectorToken", "   ");
    store.set("collectorData", r#"{"_id":"c1","name":"Ravi"}"#);
    assert_eq!(Session::load(&store, Role::Collector, 0), None);
}

#[test]
fn load_with_malformed_user_blob_is_none() {
    let store = MemoryStore::new();
    store.set("collectorToken", "tok");
    store.set("collectorData", "not json");
    assert_eq!(Session::load(&store, Role::Collector, 0), None);
}

#[test]
fn load_accepts_legacy_user_blob_with_mongo_ids() {
    let store = MemoryStore::new();
    store.set("customerToken", "tok");
    store.set("customerData", r#"{"_id":"cu1","name":"Asha","accountId":{"_id":"acc9"}}"#);
    let session = Session::load(&store, Role::Customer, 0).unwrap();
    assert_eq!(session.user.id, "cu1");
    assert_eq!(session.user.account_id.as_deref(), Some("acc9"));
    assert_eq!(session.expires_at, None);
}

#[test]
fn roles_do_not_share_keys() {
    let store = MemoryStore::new();
    collector_session().save(&store);
    assert_eq!(Session::load(&store, Role::Customer, 0), None);
}

#[test]
fn expired_session_is_not_loaded() {
    let store = MemoryStore::new();
    let mut session = collector_session();
    session.expires_at = Some(1_000);
    session.save(&store);
    assert!(Session::load(&store, Role::Collector, 999).is_some());
    assert!(Session::load(&store, Role::Collector, 1_000).is_none());
}

#[test]
fn clear_removes_both_keys() {
    let store = MemoryStore::new();
    collector_session().save(&store);
    Session::clear(&store, Role::Collector);
    assert!(store.is_empty());
}

// =============================================================
// Login response
// =============================================================

#[test]
fn from_login_builds_session_with_expiry() {
    let response: LoginResponse = serde_json::from_value(json!({
        "success": true,
        "token": "jwt",
        "user": { "_id": "c1", "name": "Ravi", "area": "North" },
        "expiresIn": 60
    }))
    .unwrap();
    let session = Session::from_login(Role::Collector, response, 10_000).unwrap();
    assert_eq!(session.token, "jwt");
    assert_eq!(session.user.area.as_deref(), Some("North"));
    assert_eq!(session.expires_at, Some(70_000));
}

#[test]
fn from_login_accepts_user_under_data() {
    let response: LoginResponse =
        serde_json::from_value(json!({ "token": "jwt", "data": { "id": "cu1", "name": "Asha" } })).unwrap();
    let session = Session::from_login(Role::Customer, response, 0).unwrap();
    assert_eq!(session.user.id, "cu1");
}

#[test]
fn from_login_without_token_is_decode_error() {
    let response: LoginResponse = serde_json::from_value(json!({ "user": { "_id": "c1" } })).unwrap();
    assert!(matches!(
        Session::from_login(Role::Collector, response, 0),
        Err(ApiError::Decode(_))
    ));
}

// =============================================================
// Guard
// =============================================================

#[test]
fn guard_without_token_redirects_and_skips_fetch() {
    let store = MemoryStore::new();
    let mut fetches = 0;
    let decision = guard(&store, Role::Collector, 0);
    let redirect = decision.proceed(|_| fetches += 1);
    assert_eq!(redirect, Some("/collector/login"));
    assert_eq!(fetches, 0);
}

#[test]
fn guard_redirects_to_matching_login_route() {
    let store = MemoryStore::new();
    assert_eq!(guard(&store, Role::Customer, 0), GuardDecision::Redirect("/customer/login"));
}

#[test]
fn guard_with_session_fetches_once() {
    let store = MemoryStore::new();
    collector_session().save(&store);
    let mut seen = Vec::new();
    let decision = guard(&store, Role::Collector, 0);
    let redirect = decision.proceed(|session| seen.push(session.user.id.clone()));
    assert_eq!(redirect, None);
    assert_eq!(seen, vec!["c1".to_owned()]);
    assert_eq!(decision.session().map(|s| s.token.as_str()), Some("tok-1"));
}
