//! One row of the customer's transaction history.

use leptos::prelude::*;

use ledger::{StatusKey, Transaction, TxKind};

use crate::util::format;

#[component]
pub fn TransactionCard(transaction: Transaction, on_open: Callback<String>) -> impl IntoView {
    let id = transaction.id.clone();
    let kind_class = match transaction.kind {
        TxKind::Credit => "transaction-card transaction-card--credit",
        TxKind::Debit => "transaction-card transaction-card--debit",
        TxKind::Unknown => "transaction-card",
    };
    let note = transaction.note().unwrap_or("—").to_owned();

    view! {
        <button class=kind_class on:click=move |_| on_open.run(id.clone())>
            <span class="transaction-card__amount">
                {format::signed_amount(transaction.kind, transaction.amount)}
            </span>
            <span class="transaction-card__note">{note}</span>
            <span class="transaction-card__date">{format::date(transaction.when())}</span>
            <span class=format::tx_status_class(transaction.status)>{transaction.status.label()}</span>
        </button>
    }
}
