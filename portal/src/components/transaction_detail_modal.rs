//! Read-only dialog with every field of one transaction.

use leptos::prelude::*;

use ledger::{StatusKey, Transaction};

use crate::util::format;

#[component]
pub fn TransactionDetailModal(transaction: Transaction, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let row = |label: &'static str, value: String| {
        view! {
            <div class="dialog__row">
                <span class="dialog__label">{label}</span>
                <span class="dialog__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--transaction"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Transaction details"</h2>
                {row("Reference", transaction.id.clone())}
                {row("Amount", format::signed_amount(transaction.kind, transaction.amount))}
                {row("Type", transaction.kind.as_str().to_owned())}
                {row("Status", transaction.status.label().to_owned())}
                {row("Date", format::date(transaction.when()))}
                {row("Reason", transaction.reason.clone().unwrap_or_else(|| "—".to_owned()))}
                {transaction
                    .description
                    .clone()
                    .map(|description| row("Description", description))}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
