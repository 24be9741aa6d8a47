//! Landing page: pick a portal.

use leptos::prelude::*;

use ledger::Role;

use crate::state::session::SessionState;
use crate::util::auth::now_ms;

#[component]
pub fn HomePage() -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionState>>();

    let entry = move |role: Role, blurb: &'static str| {
        let signed_in = move || sessions.with(|s| s.active(role, now_ms()).is_some());
        view! {
            <div class="home-card">
                <h2>{format!("{} Portal", role.label())}</h2>
                <p>{blurb}</p>
                <a
                    class="btn btn--primary"
                    href=move || if signed_in() { role.home_route() } else { role.login_route() }
                >
                    {move || if signed_in() { "Open dashboard" } else { "Sign in" }}
                </a>
            </div>
        }
    };

    view! {
        <div class="home-page">
            <h1>"Savings Portal"</h1>
            <div class="home-page__cards">
                {entry(Role::Customer, "Check your balance, review transactions and request withdrawals.")}
                {entry(Role::Collector, "Review customer withdrawal requests and send feedback.")}
            </div>
        </div>
    }
}
