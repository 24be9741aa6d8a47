//! Browser glue and display helpers shared across pages.

pub mod alive;
pub mod auth;
pub mod dialog;
pub mod format;
pub mod storage;
