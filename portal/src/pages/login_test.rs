use super::*;

#[test]
fn heading_names_the_role() {
    assert_eq!(heading(Role::Customer), "Customer sign in");
    assert_eq!(heading(Role::Collector), "Collector sign in");
}

#[test]
fn switch_link_points_at_other_role() {
    assert_eq!(other_role(Role::Customer), Role::Collector);
    assert_eq!(other_role(other_role(Role::Customer)), Role::Customer);
    assert_eq!(other_role(Role::Customer).login_route(), "/collector/login");
}

#[test]
fn blank_credentials_never_reach_the_network() {
    let err = validate_login("   ", "secret").unwrap_err();
    assert_eq!(err.user_message(), "Enter both email and password.");
    assert!(validate_login("a@b.com", "").is_err());
}
