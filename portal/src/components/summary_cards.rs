//! Balance and totals row on the customer dashboard.

use leptos::prelude::*;

use ledger::PaymentSummary;

use crate::util::format;

#[component]
pub fn SummaryCards(#[prop(into)] summary: Signal<PaymentSummary>) -> impl IntoView {
    let card = move |label: &'static str, modifier: &'static str, pick: fn(&PaymentSummary) -> f64| {
        view! {
            <div class=format!("summary-card summary-card--{modifier}")>
                <span class="summary-card__label">{label}</span>
                <span class="summary-card__value">{move || format::amount(summary.with(pick))}</span>
            </div>
        }
    };

    view! {
        <section class="summary-cards">
            {card("Balance", "balance", |s| s.balance)}
            {card("Total deposits", "deposits", |s| s.total_deposits)}
            {card("Total withdrawals", "withdrawals", |s| s.total_withdrawals)}
            {card("Pending withdrawals", "pending", |s| s.pending_withdrawals)}
        </section>
    }
}
