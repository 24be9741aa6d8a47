use super::*;

#[test]
fn login_path_is_role_scoped() {
    assert_eq!(login(Role::Customer), "/api/auth/customer/login");
    assert_eq!(login(Role::Collector), "/api/auth/collector/login");
}

#[test]
fn user_payments_embeds_customer_id() {
    assert_eq!(user_payments("cu-7"), "/api/payments/getuserpayments/cu-7");
}

#[test]
fn withdrawal_action_paths() {
    assert_eq!(approve_withdrawal("w1"), "/api/payments/withdrawals/w1/approve");
    assert_eq!(reject_withdrawal("w1"), "/api/payments/withdrawals/w1/reject");
}

#[test]
fn join_trims_trailing_slash() {
    assert_eq!(join("http://api.test/", MY_FEEDBACK), "http://api.test/api/feedback/collector/my-feedback");
    assert_eq!(join("http://api.test", "/x"), "http://api.test/x");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}
