//! HTTP transport to the savings API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls; record shapes and response classification
//! live in the `ledger` crate so the CLI shares them.

pub mod api;
