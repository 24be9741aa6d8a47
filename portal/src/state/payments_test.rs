use super::*;
use ledger::StatusFilter;
use serde_json::json;

fn overview() -> PaymentsOverview {
    serde_json::from_value(json!({
        "allTransactions": [
            { "_id": "t1", "amount": 100, "type": "credit", "status": "completed", "reason": "Daily deposit" },
            { "_id": "t2", "amount": 40, "type": "debit", "status": "pending", "reason": "Rent" },
            { "_id": "t3", "amount": 60, "type": "debit", "status": "pending", "reason": "School fees" }
        ],
        "payments": [
            { "_id": "t1", "amount": 100, "type": "credit", "status": "completed" }
        ],
        "withdrawals": [
            { "_id": "t2", "amount": 40, "type": "debit", "status": "pending" },
            { "_id": "t3", "amount": 60, "type": "debit", "status": "pending" }
        ],
        "summary": { "totalDeposits": 100, "totalWithdrawals": 0, "balance": 100, "pendingWithdrawals": 100 }
    }))
    .unwrap()
}

fn ids(items: &[Transaction]) -> Vec<&str> {
    items.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn default_state_is_empty() {
    let state = PaymentsState::default();
    assert!(!state.loading);
    assert!(state.visible().is_empty());
    assert_eq!(state.summary(), PaymentSummary::default());
    assert_eq!(state.tab, TransactionTab::All);
}

#[test]
fn loading_lifecycle() {
    let mut state = PaymentsState { error: Some("old".to_owned()), ..PaymentsState::default() };
    state.start_loading();
    assert!(state.loading);
    assert!(state.error.is_none());

    state.failed(Some("Unable to reach the server".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Unable to reach the server"));

    state.start_loading();
    state.loaded(overview());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.summary().balance, 100.0);
}

#[test]
fn tabs_select_source_list() {
    let mut state = PaymentsState::default();
    state.loaded(overview());
    assert_eq!(ids(&state.visible()), vec!["t1", "t2", "t3"]);
    state.tab = TransactionTab::Payments;
    assert_eq!(ids(&state.visible()), vec!["t1"]);
    state.tab = TransactionTab::Withdrawals;
    assert_eq!(ids(&state.visible()), vec!["t2", "t3"]);
}

#[test]
fn pending_filter_preserves_order() {
    let mut state = PaymentsState::default();
    state.loaded(overview());
    state.query.status = StatusFilter::Only(TxStatus::Pending);
    assert_eq!(ids(&state.visible()), vec!["t2", "t3"]);
}

#[test]
fn search_narrows_current_tab() {
    let mut state = PaymentsState::default();
    state.loaded(overview());
    state.query.search = "SCHOOL".to_owned();
    assert_eq!(ids(&state.visible()), vec!["t3"]);
}

#[test]
fn find_looks_up_detail_target() {
    let mut state = PaymentsState::default();
    assert!(state.find("t2").is_none());
    state.loaded(overview());
    assert_eq!(state.find("t2").map(|t| t.amount), Some(40.0));
    assert!(state.find("missing").is_none());
}

#[test]
fn find_reaches_rows_listed_only_under_payments() {
    let mut data = overview();
    data.payments.push(Transaction {
        id: "p9".to_owned(),
        amount: 25.0,
        kind: ledger::TxKind::Credit,
        status: TxStatus::Completed,
        date: None,
        created_at: None,
        reason: Some("Top-up".to_owned()),
        description: None,
    });
    let mut state = PaymentsState::default();
    state.loaded(data);
    state.tab = TransactionTab::Payments;
    assert!(state.visible().iter().any(|t| t.id == "p9"));
    assert_eq!(state.find("p9").map(|t| t.amount), Some(25.0));
}
