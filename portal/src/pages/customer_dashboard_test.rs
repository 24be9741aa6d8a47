use super::*;

#[test]
fn request_confirmation_prefers_server_text() {
    assert_eq!(request_confirmation(Some("Request #12 filed".to_owned())), "Request #12 filed");
    assert_eq!(request_confirmation(None), "Withdrawal request submitted for approval.");
}

#[test]
fn empty_text_depends_on_active_filters() {
    assert_eq!(empty_text(false), "No transactions yet.");
    assert_eq!(empty_text(true), "No transactions match your filters.");
}
