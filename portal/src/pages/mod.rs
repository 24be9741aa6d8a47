//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session guard, fetch, action
//! dispatch) and delegates rendering details to `components`.

pub mod collector_feedback;
pub mod collector_withdrawals;
pub mod customer_dashboard;
pub mod home;
pub mod login;
