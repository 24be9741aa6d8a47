use super::*;

#[test]
fn new_flag_is_alive() {
    assert!(PageAlive::default().is_alive());
}

#[test]
fn end_is_seen_by_every_clone() {
    let alive = PageAlive::default();
    let task = alive.clone();
    alive.end();
    assert!(!task.is_alive());
}
