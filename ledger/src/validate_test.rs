use super::*;

#[test]
fn rejection_reason_shorter_than_five_is_rejected() {
    assert!(matches!(validate_rejection_reason("no"), Err(ApiError::Validation(_))));
    assert!(validate_rejection_reason("four").is_err());
}

#[test]
fn rejection_reason_of_exactly_five_is_accepted() {
    assert_eq!(validate_rejection_reason("delay"), Ok("delay".to_owned()));
}

#[test]
fn rejection_reason_is_trimmed_before_counting() {
    assert!(validate_rejection_reason("  ab  ").is_err());
    assert_eq!(validate_rejection_reason("  fraud  "), Ok("fraud".to_owned()));
}

#[test]
fn rejection_reason_counts_characters_not_bytes() {
    assert!(validate_rejection_reason("ééé").is_err());
    assert!(validate_rejection_reason("ééééé").is_ok());
}

#[test]
fn feedback_requires_message() {
    let err = validate_feedback("   ", 4, FeedbackCategory::General).unwrap_err();
    assert_eq!(err.user_message(), "Please enter your feedback.");
}

#[test]
fn feedback_rating_out_of_range_is_rejected() {
    assert!(validate_feedback("ok", 0, FeedbackCategory::General).is_err());
    assert!(validate_feedback("ok", 6, FeedbackCategory::General).is_err());
}

#[test]
fn feedback_requires_selectable_category() {
    assert!(validate_feedback("ok", 3, FeedbackCategory::Other).is_err());
}

#[test]
fn feedback_too_long_is_rejected() {
    let long = "x".repeat(MAX_FEEDBACK_CHARS + 1);
    assert!(validate_feedback(&long, 3, FeedbackCategory::General).is_err());
}

#[test]
fn feedback_valid_draft_is_trimmed() {
    let draft = validate_feedback("  Collections app is slow  ", 3, FeedbackCategory::Technical).unwrap();
    assert_eq!(draft.message, "Collections app is slow");
    assert_eq!(draft.rating.get(), 3);
    assert_eq!(draft.category, FeedbackCategory::Technical);
}

#[test]
fn withdrawal_amount_must_be_positive_number() {
    assert!(validate_withdrawal_request("abc", "Rent", Some("acc")).is_err());
    assert!(validate_withdrawal_request("0", "Rent", Some("acc")).is_err());
    assert!(validate_withdrawal_request("-5", "Rent", Some("acc")).is_err());
    assert!(validate_withdrawal_request("inf", "Rent", Some("acc")).is_err());
}

#[test]
fn withdrawal_requires_reason_and_account() {
    assert!(validate_withdrawal_request("100", "  ", Some("acc")).is_err());
    assert!(validate_withdrawal_request("100", "Rent", None).is_err());
    assert!(validate_withdrawal_request("100", "Rent", Some(" ")).is_err());
}

#[test]
fn withdrawal_valid_request() {
    let req = validate_withdrawal_request(" 250.5 ", " School fees ", Some("acc1")).unwrap();
    assert_eq!(req, WithdrawalRequest { amount: 250.5, reason: "School fees".to_owned(), account_id: "acc1".to_owned() });
}

#[test]
fn login_requires_both_fields() {
    assert!(validate_login("", "pw").is_err());
    assert!(validate_login("a@b.com", "").is_err());
    assert_eq!(
        validate_login(" a@b.com ", "pw"),
        Ok(Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() })
    );
}
