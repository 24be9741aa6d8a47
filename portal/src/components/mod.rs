//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, toolbars and dialogs from props and report user
//! intent through callbacks; pages own the state and the network calls.

pub mod error_banner;
pub mod feedback_card;
pub mod feedback_modal;
pub mod list_toolbar;
pub mod portal_header;
pub mod reject_dialog;
pub mod summary_cards;
pub mod transaction_card;
pub mod transaction_detail_modal;
pub mod withdraw_modal;
pub mod withdrawal_card;
