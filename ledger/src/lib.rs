//! Shared domain model for the savings portal.
//!
//! This crate owns the record shapes, session model, and pure workflow logic
//! used by `portal` (browser UI), `server` (SSR host + API proxy) and `cli`.
//! Nothing here performs I/O: HTTP transport and storage backends are
//! supplied by the caller through [`session::KeyValueStore`] and
//! [`review::WithdrawalDesk`].
//!
//! MODULES
//! =======
//! - `session`: roles, stored sessions, and the protected-route guard.
//! - `records`: transactions, withdrawals, feedback, payments overview.
//! - `filter`: the one reusable search/status filter for every list.
//! - `validate`: client-side input checks run before any request.
//! - `review`: approve/reject dispatch with per-row processing flags.
//! - `error`: API failure classification.
//! - `endpoints`: REST paths of the external API.

pub mod endpoints;
pub mod error;
pub mod filter;
pub mod records;
pub mod review;
pub mod session;
pub mod validate;

pub use error::ApiError;
pub use filter::{ListQuery, Listable, StatusFilter, StatusKey};
pub use records::{
    Feedback, FeedbackCategory, FeedbackDraft, FeedbackStatus, PaymentSummary, PaymentsOverview, Rating,
    Transaction, TxKind, TxStatus, Withdrawal, WithdrawalRequest,
};
pub use session::{GuardDecision, KeyValueStore, MemoryStore, Role, Session, SessionUser};
