//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is provided once as an `RwSignal` context from the app
//! root. Fields are plain data and the methods are pure, so the state
//! transitions are unit-tested without a browser.

pub mod feedback;
pub mod payments;
pub mod session;
pub mod ui;
pub mod withdrawals;
