//! Liveness flag for async work started by a page.
//!
//! A page creates one flag on mount; the flag flips to dead when the page's
//! reactive owner is cleaned up, and spawned fetches drop their result
//! instead of writing into state the user has navigated away from.

#[cfg(test)]
#[path = "alive_test.rs"]
mod alive_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct PageAlive(Arc<AtomicBool>);

impl Default for PageAlive {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PageAlive {
    /// A flag tied to the current reactive owner.
    pub fn for_current_page() -> Self {
        let alive = Self::default();
        let on_leave = alive.clone();
        on_cleanup(move || on_leave.end());
        alive
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
