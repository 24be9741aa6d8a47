#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_outside_the_browser() {
    assert!(!confirm("Approve?"));
}

#[test]
fn alert_is_noop_but_callable() {
    alert("done");
}
