//! One withdrawal request in the collector's approval queue.

use leptos::prelude::*;

use ledger::{StatusKey, TxStatus, Withdrawal};

use crate::util::format;

#[component]
pub fn WithdrawalCard(
    withdrawal: Withdrawal,
    #[prop(into)] processing: Signal<bool>,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
) -> impl IntoView {
    let pending = withdrawal.status == TxStatus::Pending;
    let approve_id = withdrawal.id.clone();
    let reject_id = withdrawal.id.clone();
    let customer = withdrawal
        .customer_name
        .clone()
        .unwrap_or_else(|| "Unknown customer".to_owned());
    let outcome = match withdrawal.status {
        TxStatus::Approved => withdrawal.approved_by.as_ref().map(|by| format!("Approved by {by}")),
        TxStatus::Rejected => Some(match (&withdrawal.rejected_by, &withdrawal.rejection_reason) {
            (Some(by), Some(reason)) => format!("Rejected by {by}: {reason}"),
            (None, Some(reason)) => format!("Rejected: {reason}"),
            (Some(by), None) => format!("Rejected by {by}"),
            (None, None) => "Rejected".to_owned(),
        }),
        _ => None,
    };

    view! {
        <article class="withdrawal-card" class:withdrawal-card--busy={move || processing.get()}>
            <header class="withdrawal-card__header">
                <span class="withdrawal-card__customer">{customer}</span>
                <span class=format::tx_status_class(withdrawal.status)>{withdrawal.status.label()}</span>
            </header>
            <p class="withdrawal-card__amount">{format::amount(withdrawal.amount)}</p>
            {withdrawal
                .account_number
                .clone()
                .map(|number| view! { <p class="withdrawal-card__account">"Account " {number}</p> })}
            <p class="withdrawal-card__reason">{withdrawal.reason.clone().unwrap_or_else(|| "—".to_owned())}</p>
            <p class="withdrawal-card__date">{format::date(withdrawal.requested_at.as_deref())}</p>
            {outcome.map(|text| view! { <p class="withdrawal-card__outcome">{text}</p> })}
            {pending
                .then(move || {
                    view! {
                        <div class="withdrawal-card__actions">
                            <button
                                class="btn btn--primary"
                                disabled=move || processing.get()
                                on:click=move |_| on_approve.run(approve_id.clone())
                            >
                                {move || if processing.get() { "Processing…" } else { "Approve" }}
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || processing.get()
                                on:click=move |_| on_reject.run(reject_id.clone())
                            >
                                "Reject"
                            </button>
                        </div>
                    }
                })}
        </article>
    }
}
