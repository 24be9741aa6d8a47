use super::*;

#[test]
fn collector_nav_reaches_both_screens() {
    let hrefs: Vec<&str> = nav_links(Role::Collector).iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/collector", "/collector/feedback"]);
}

#[test]
fn customer_nav_points_home() {
    assert_eq!(nav_links(Role::Customer)[0].0, Role::Customer.home_route());
}
