//! # portal
//!
//! Leptos + WASM frontend for the savings portal: the customer dashboard
//! (payments overview, transactions, withdrawal requests) and the collector
//! dashboard (withdrawal approvals, feedback to the admin).
//!
//! Domain records, filtering, validation and the review workflow come from
//! the `ledger` crate; this crate owns routing, reactive state, browser
//! storage and HTTP transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
