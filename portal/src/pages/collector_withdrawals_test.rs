use super::*;
use serde_json::json;

#[test]
fn queue_summary_counts_pending() {
    assert_eq!(queue_summary(0, 0), "No withdrawal requests");
    assert_eq!(queue_summary(3, 10), "3 pending of 10");
}

#[test]
fn approve_prompt_names_customer_and_amount() {
    let rows = Withdrawal::list_from_value(&json!([
        { "_id": "w1", "amount": 500, "status": "pending", "customerName": "Asha" }
    ]));
    let prompt = approve_prompt(rows.first()).unwrap();
    assert!(prompt.contains("approve"));
    assert!(prompt.contains("500.00"));
    assert!(prompt.contains("Asha"));
}

#[test]
fn approve_prompt_skips_missing_row() {
    assert_eq!(approve_prompt(None), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn dispatch_without_session_leaves_rows_idle() {
    let sessions = RwSignal::new(SessionState::default());
    let withdrawals = RwSignal::new(WithdrawalsState::default());
    dispatch_review(sessions, withdrawals, PageAlive::default(), "w1".to_owned(), Decision::Approve);
    assert!(withdrawals.with_untracked(|w| w.tracker.is_idle()));
}
