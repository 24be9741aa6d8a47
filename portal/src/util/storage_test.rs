#![cfg(not(feature = "hydrate"))]

use super::*;
use ledger::{GuardDecision, Role, session};

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(BrowserStore.get("collectorToken"), None);
}

#[test]
fn writes_are_noops_outside_the_browser() {
    BrowserStore.set("collectorToken", "tok");
    BrowserStore.remove("collectorToken");
    assert_eq!(BrowserStore.get("collectorToken"), None);
}

#[test]
fn guard_over_browser_store_redirects_during_ssr() {
    assert_eq!(session::guard(&BrowserStore, Role::Collector, 0), GuardDecision::Redirect("/collector/login"));
}
