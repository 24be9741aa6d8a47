//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use ledger::Role;

use crate::pages::{
    collector_feedback::CollectorFeedbackPage, collector_withdrawals::CollectorWithdrawalsPage,
    customer_dashboard::CustomerDashboardPage, home::HomePage, login::LoginPage,
};
use crate::state::{
    feedback::FeedbackState, payments::PaymentsState, session::SessionState, ui::UiState,
    withdrawals::WithdrawalsState,
};
use crate::util::auth::now_ms;
use crate::util::storage::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores stored sessions once the
/// page is live in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sessions = RwSignal::new(SessionState::default());
    let payments = RwSignal::new(PaymentsState::default());
    let withdrawals = RwSignal::new(WithdrawalsState::default());
    let feedback = RwSignal::new(FeedbackState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(sessions);
    provide_context(payments);
    provide_context(withdrawals);
    provide_context(feedback);
    provide_context(ui);

    // Effects only run after hydration, so guards never redirect during SSR.
    Effect::new(move || {
        sessions.set(SessionState::restore(&BrowserStore, now_ms()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/savings-portal.css"/>
        <Title text="Savings Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("customer"), StaticSegment("login"))
                    view=|| view! { <LoginPage role=Role::Customer/> }
                />
                <Route
                    path=(StaticSegment("collector"), StaticSegment("login"))
                    view=|| view! { <LoginPage role=Role::Collector/> }
                />
                <Route path=StaticSegment("customer") view=CustomerDashboardPage/>
                <Route path=StaticSegment("collector") view=CollectorWithdrawalsPage/>
                <Route
                    path=(StaticSegment("collector"), StaticSegment("feedback"))
                    view=CollectorFeedbackPage
                />
            </Routes>
        </Router>
    }
}
