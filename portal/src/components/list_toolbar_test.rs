use super::*;
use ledger::{FeedbackStatus, TxStatus};

#[test]
fn transaction_options_start_with_all() {
    let options = status_options::<TxStatus>();
    assert_eq!(options[0], ("all", "All statuses"));
    let keys: Vec<&str> = options.iter().map(|(key, _)| *key).collect();
    assert!(keys.contains(&"pending"));
    assert!(!keys.contains(&"unknown"));
}

#[test]
fn feedback_options_cover_every_selectable_status() {
    let options = status_options::<FeedbackStatus>();
    assert_eq!(options.len(), 1 + FeedbackStatus::ALL.len());
    assert_eq!(options[1], ("pending", "Pending"));
}
