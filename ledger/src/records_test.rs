use super::*;
use crate::filter::{ListQuery, StatusFilter, apply_query};
use serde_json::json;

fn tx(id: &str, status: TxStatus) -> Transaction {
    Transaction {
        id: id.to_owned(),
        amount: 100.0,
        kind: TxKind::Credit,
        status,
        date: Some("2024-05-01T10:00:00Z".to_owned()),
        created_at: None,
        reason: None,
        description: None,
    }
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_data_unwraps_payload() {
    let data: Vec<Feedback> = envelope_data(json!({ "success": true, "data": [] })).unwrap();
    assert!(data.is_empty());
}

#[test]
fn envelope_success_defaults_to_true() {
    let overview: PaymentsOverview = envelope_data(json!({ "data": { "summary": { "balance": 12.5 } } })).unwrap();
    assert_eq!(overview.summary.balance, 12.5);
    assert!(overview.all_transactions.is_empty());
}

#[test]
fn envelope_success_false_is_server_error() {
    let err = envelope_data::<Vec<Feedback>>(json!({ "success": false, "message": "nope" })).unwrap_err();
    assert_eq!(err, ApiError::Server { status: 200, message: "nope".to_owned() });
}

#[test]
fn envelope_without_data_is_decode_error() {
    let err = envelope_data::<Vec<Feedback>>(json!({ "success": true })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn envelope_rows_skips_rows_that_do_not_decode() {
    let rows: Vec<Feedback> = envelope_rows(json!({
        "success": true,
        "data": [
            { "_id": "f1", "message": "ok", "rating": 4 },
            { "message": "no id" },
            "not an object",
            { "_id": "f3", "category": null, "status": null, "rating": 4.5 }
        ]
    }))
    .unwrap();
    let ids: Vec<&str> = rows.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f1", "f3"]);
}

#[test]
fn envelope_rows_requires_a_list() {
    let err = envelope_rows::<Feedback>(json!({ "success": true, "data": { "_id": "f1" } })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Transactions
// =============================================================

#[test]
fn transaction_decodes_mongo_shape_and_string_amounts() {
    let t: Transaction = serde_json::from_value(json!({
        "_id": "t1",
        "amount": "250.50",
        "type": "debit",
        "status": "completed",
        "createdAt": "2024-04-02T08:00:00Z",
        "description": "Monthly deposit"
    }))
    .unwrap();
    assert_eq!(t.id, "t1");
    assert_eq!(t.amount, 250.5);
    assert_eq!(t.kind, TxKind::Debit);
    assert_eq!(t.status, TxStatus::Completed);
    assert_eq!(t.when(), Some("2024-04-02T08:00:00Z"));
    assert_eq!(t.note(), Some("Monthly deposit"));
}

#[test]
fn unknown_status_and_kind_do_not_fail_decoding() {
    let t: Transaction = serde_json::from_value(json!({ "_id": "t2", "amount": 1, "type": "fee", "status": "on-hold" })).unwrap();
    assert_eq!(t.kind, TxKind::Unknown);
    assert_eq!(t.status, TxStatus::Unknown);
}

#[test]
fn pending_filter_keeps_exact_subset_in_order() {
    let items = vec![
        tx("a", TxStatus::Pending),
        tx("b", TxStatus::Approved),
        tx("c", TxStatus::Pending),
        tx("d", TxStatus::Rejected),
        tx("e", TxStatus::Pending),
    ];
    let query = ListQuery::with_status(StatusFilter::Only(TxStatus::Pending));
    let ids: Vec<&str> = apply_query(&items, &query).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "e"]);
}

#[test]
fn transaction_search_matches_reason_case_insensitively() {
    let mut school = tx("t1", TxStatus::Pending);
    school.reason = Some("School Fees".to_owned());
    let items = vec![school, tx("t2", TxStatus::Pending)];
    let query = ListQuery { search: "school".to_owned(), status: StatusFilter::All };
    let hits = apply_query(&items, &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "t1");
}

// =============================================================
// Withdrawal normalization
// =============================================================

#[test]
fn withdrawal_resolves_nested_collector_object() {
    let w = Withdrawal::from_value(&json!({
        "_id": "w1",
        "amount": 500,
        "status": "pending",
        "accountId": { "_id": "acc1", "accountNumber": "SV-001", "collectorId": { "_id": "c1" }, "customerId": { "name": "Asha" } }
    }))
    .unwrap();
    assert_eq!(w.id, "w1");
    assert_eq!(w.amount, 500.0);
    assert_eq!(w.status, TxStatus::Pending);
    assert_eq!(w.collector_id.as_deref(), Some("c1"));
    assert_eq!(w.account_id.as_deref(), Some("acc1"));
    assert_eq!(w.account_number.as_deref(), Some("SV-001"));
    assert_eq!(w.customer_name.as_deref(), Some("Asha"));
}

#[test]
fn withdrawal_resolves_flat_collector_string() {
    let w = Withdrawal::from_value(&json!({ "_id": "w2", "amount": 10, "collectorId": "c9", "customerName": "Vik" })).unwrap();
    assert_eq!(w.collector_id.as_deref(), Some("c9"));
    assert_eq!(w.customer_name.as_deref(), Some("Vik"));
    assert_eq!(w.account_id, None);
}

#[test]
fn withdrawal_resolves_account_collector_string() {
    let w = Withdrawal::from_value(&json!({ "_id": "w3", "accountId": { "_id": "a", "collectorId": "c3" } })).unwrap();
    assert_eq!(w.collector_id.as_deref(), Some("c3"));
}

#[test]
fn withdrawal_approver_prefers_name() {
    let w = Withdrawal::from_value(&json!({
        "_id": "w4",
        "status": "approved",
        "approvedBy": { "_id": "c1", "name": "Ravi" },
        "rejectedBy": "c2",
        "rejectionReason": "duplicate"
    }))
    .unwrap();
    assert_eq!(w.approved_by.as_deref(), Some("Ravi"));
    assert_eq!(w.rejected_by.as_deref(), Some("c2"));
    assert_eq!(w.rejection_reason.as_deref(), Some("duplicate"));
}

#[test]
fn withdrawal_without_id_is_dropped() {
    let rows = Withdrawal::list_from_value(&json!([{ "amount": 1 }, { "_id": "ok" }]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "ok");
    assert!(Withdrawal::list_from_value(&json!({ "not": "an array" })).is_empty());
}

#[test]
fn collector_scoping_example() {
    let body = json!({
        "success": true,
        "data": [{ "_id": "w1", "amount": 500, "status": "pending", "accountId": { "collectorId": { "_id": "c1" } } }]
    });
    let rows = Withdrawal::list_from_value(&body["data"]);

    let mine = for_collector(rows.clone(), "c1");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "w1");

    assert!(for_collector(rows, "c2").is_empty());
}

#[test]
fn withdrawal_without_collector_is_never_scoped_in() {
    let rows = Withdrawal::list_from_value(&json!([{ "_id": "w1" }]));
    assert!(for_collector(rows, "c1").is_empty());
}

// =============================================================
// Feedback
// =============================================================

#[test]
fn feedback_decodes_admin_notes_alias() {
    let f: Feedback = serde_json::from_value(json!({
        "_id": "f1",
        "category": "technical",
        "message": "App freezes on sync",
        "rating": 2,
        "status": "reviewed",
        "adminNotes": "Fixed in next release"
    }))
    .unwrap();
    assert_eq!(f.category, FeedbackCategory::Technical);
    assert_eq!(f.status, FeedbackStatus::Reviewed);
    assert!(f.has_admin_notes());
    assert_eq!(f.stars(), 2);
}

#[test]
fn feedback_unknown_category_maps_to_other() {
    let f: Feedback = serde_json::from_value(json!({ "_id": "f2", "category": "billing", "rating": 9 })).unwrap();
    assert_eq!(f.category, FeedbackCategory::Other);
    assert_eq!(f.stars(), 5);
    assert!(!f.has_admin_notes());
}

#[test]
fn feedback_draft_serializes_wire_body() {
    let draft = FeedbackDraft {
        message: "Great".to_owned(),
        rating: Rating::try_from(4).unwrap(),
        category: FeedbackCategory::General,
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({ "message": "Great", "rating": 4, "category": "general" })
    );
}

#[test]
fn rating_bounds() {
    assert!(Rating::try_from(0).is_err());
    assert!(Rating::try_from(6).is_err());
    assert_eq!(Rating::try_from(1).map(Rating::get), Ok(1));
    assert_eq!(Rating::try_from(5).map(Rating::get), Ok(5));
}

#[test]
fn category_from_key_round_trips_selectable_values() {
    for category in FeedbackCategory::SELECTABLE {
        assert_eq!(FeedbackCategory::from_key(category.key()), *category);
    }
    assert_eq!(FeedbackCategory::from_key("nonsense"), FeedbackCategory::Other);
}

#[test]
fn withdrawal_request_serializes_account_id_camel_case() {
    let req = WithdrawalRequest { amount: 200.0, reason: "Rent".to_owned(), account_id: "acc1".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "amount": 200.0, "reason": "Rent", "accountId": "acc1" })
    );
}

// =============================================================
// Lenient decoding
// =============================================================

#[test]
fn odd_transaction_row_does_not_fail_overview() {
    let overview: PaymentsOverview = envelope_data(json!({
        "success": true,
        "data": {
            "allTransactions": [
                { "_id": "t1", "amount": "N/A", "type": "credit", "status": "completed" },
                { "_id": "t2", "amount": 40, "type": null, "status": null },
                { "amount": 10, "status": "pending" },
                { "_id": "t4", "amount": 60, "type": "debit", "status": "pending" }
            ],
            "payments": "unavailable",
            "summary": { "balance": "oops", "totalDeposits": 100 }
        }
    }))
    .unwrap();

    let ids: Vec<&str> = overview.all_transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t4"]);
    assert_eq!(overview.all_transactions[0].amount, 0.0);
    assert_eq!(overview.all_transactions[1].kind, TxKind::Unknown);
    assert_eq!(overview.all_transactions[1].status, TxStatus::Unknown);
    assert!(overview.payments.is_empty());
    assert_eq!(overview.summary.balance, 0.0);
    assert_eq!(overview.summary.total_deposits, 100.0);
}

#[test]
fn odd_feedback_fields_fall_back_to_defaults() {
    let f: Feedback = serde_json::from_value(json!({
        "_id": "f9",
        "category": null,
        "message": 42,
        "rating": 4.5,
        "status": null
    }))
    .unwrap();
    assert_eq!(f.category, FeedbackCategory::Other);
    assert_eq!(f.status, FeedbackStatus::Unknown);
    assert_eq!(f.message, "");
    assert_eq!(f.rating, 5);
}

#[test]
fn rating_tolerates_strings_and_junk() {
    let rating = |value: Value| serde_json::from_value::<Feedback>(json!({ "_id": "f", "rating": value })).unwrap().rating;
    assert_eq!(rating(json!("3")), 3);
    assert_eq!(rating(json!(3.4)), 3);
    assert_eq!(rating(json!(-2)), 0);
    assert_eq!(rating(json!("lots")), 0);
    assert_eq!(rating(Value::Null), 0);
}
