//! Customer dashboard: balance summary, transaction history, withdrawals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by the customer session. The payments overview is fetched once per
//! mount (and again after a withdrawal request or a retry); the tab bar,
//! search box and status select filter it locally without new requests.

#[cfg(test)]
#[path = "customer_dashboard_test.rs"]
mod customer_dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use ledger::{Role, StatusFilter, TxStatus, WithdrawalRequest};

use crate::components::error_banner::ErrorBanner;
use crate::components::list_toolbar::{ListToolbar, status_options};
use crate::components::portal_header::PortalHeader;
use crate::components::summary_cards::SummaryCards;
use crate::components::transaction_card::TransactionCard;
use crate::components::transaction_detail_modal::TransactionDetailModal;
use crate::components::withdraw_modal::WithdrawModal;
use crate::state::payments::{PaymentsState, TransactionTab};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::alive::PageAlive;
use crate::util::auth::{credentials, install_session_guard, now_ms, sign_out};

const ROLE: Role = Role::Customer;

/// Alert text after a withdrawal request was accepted.
fn request_confirmation(server_message: Option<String>) -> String {
    server_message.unwrap_or_else(|| "Withdrawal request submitted for approval.".to_owned())
}

/// Empty-list text: distinguishes "nothing yet" from "nothing matches".
fn empty_text(filtering: bool) -> &'static str {
    if filtering { "No transactions match your filters." } else { "No transactions yet." }
}

fn load_payments(sessions: RwSignal<SessionState>, payments: RwSignal<PaymentsState>, alive: PageAlive) {
    let Some((token, customer_id)) = credentials(sessions, ROLE) else {
        return;
    };
    payments.update(PaymentsState::start_loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_user_payments(&token, &customer_id).await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(overview) => payments.update(|p| p.loaded(overview)),
            Err(err) => {
                let message = crate::util::auth::handle_failure(sessions, ROLE, &err);
                payments.update(|p| p.failed(message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, customer_id, alive);
    }
}

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionState>>();
    let payments = expect_context::<RwSignal<PaymentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let alive = PageAlive::for_current_page();

    let load = {
        let alive = alive.clone();
        move || load_payments(sessions, payments, alive.clone())
    };
    install_session_guard(ROLE, sessions, use_navigate(), {
        let load = load.clone();
        move |_| load()
    });
    on_cleanup(move || ui.update(UiState::close_all));

    let on_retry = Callback::new(move |()| load());
    let on_logout = Callback::new(move |()| {
        payments.set(PaymentsState::default());
        sign_out(sessions, ROLE);
    });
    let on_open_detail = Callback::new(move |id: String| ui.update(|u| u.open_detail(&id)));
    let on_close_detail = Callback::new(move |()| ui.update(UiState::close_detail));
    let on_close_withdraw = Callback::new(move |()| ui.update(UiState::close_withdraw));

    let on_withdraw = Callback::new(move |request: WithdrawalRequest| {
        let Some((token, _)) = credentials(sessions, ROLE) else {
            return;
        };
        if payments.with_untracked(|p| p.submitting_withdrawal) {
            return;
        }
        payments.update(|p| p.submitting_withdrawal = true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::request_withdrawal(&token, &request).await;
                payments.update(|p| p.submitting_withdrawal = false);
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(message) => {
                        ui.update(UiState::close_withdraw);
                        crate::util::dialog::alert(&request_confirmation(message));
                        load_payments(sessions, payments, alive);
                    }
                    Err(err) => {
                        if let Some(message) = crate::util::auth::handle_failure(sessions, ROLE, &err) {
                            crate::util::dialog::alert(&message);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
            payments.update(|p| p.submitting_withdrawal = false);
        }
    });

    let user_name = Signal::derive(move || {
        sessions.with(|s| s.get(ROLE).map(|s| s.user.name.clone()).unwrap_or_default())
    });
    let account_id = move || {
        sessions.with_untracked(|s| s.get(ROLE).and_then(|s| s.user.account_id.clone()))
    };

    view! {
        <Show
            when=move || sessions.with(|s| s.active(ROLE, now_ms()).is_some())
            fallback=move || view! { <div class="dashboard-page"><p>"Checking your session..."</p></div> }
        >
            <div class="dashboard-page dashboard-page--customer">
                <PortalHeader role=ROLE user_name=user_name on_logout=on_logout/>

                <ErrorBanner message=Signal::derive(move || payments.with(|p| p.error.clone())) on_retry=on_retry/>

                <SummaryCards summary=Signal::derive(move || payments.with(PaymentsState::summary))/>

                <section class="dashboard-page__actions">
                    <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_withdraw)>
                        "Request withdrawal"
                    </button>
                </section>

                <nav class="tab-bar">
                    {TransactionTab::ALL
                        .iter()
                        .map(|&tab| {
                            view! {
                                <button
                                    class="tab-bar__tab"
                                    class:tab-bar__tab--active={move || payments.with(|p| p.tab == tab)}
                                    on:click=move |_| payments.update(|p| p.tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <ListToolbar
                    search=Signal::derive(move || payments.with(|p| p.query.search.clone()))
                    status_key=Signal::derive(move || payments.with(|p| p.query.status.key()))
                    options={status_options::<TxStatus>()}
                    on_search=Callback::new(move |value: String| payments.update(|p| p.query.search = value))
                    on_status=Callback::new(move |key: String| {
                        payments.update(|p| p.query.status = StatusFilter::from_key(&key));
                    })
                    placeholder="Search by reason, type or date"
                />

                <Show
                    when=move || !payments.with(|p| p.loading)
                    fallback=move || view! { <p>"Loading transactions..."</p> }
                >
                    <div class="dashboard-page__list">
                        {move || {
                            let visible = payments.with(PaymentsState::visible);
                            if visible.is_empty() {
                                let filtering = payments.with(|p| p.query.is_active());
                                return view! { <p class="dashboard-page__empty">{empty_text(filtering)}</p> }
                                    .into_any();
                            }
                            visible
                                .into_iter()
                                .map(|transaction| {
                                    view! { <TransactionCard transaction=transaction on_open=on_open_detail/> }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </Show>

                {move || {
                    ui.with(|u| u.detail_transaction.clone())
                        .and_then(|id| payments.with(|p| p.find(&id)))
                        .map(|transaction| {
                            view! { <TransactionDetailModal transaction=transaction on_close=on_close_detail/> }
                        })
                }}

                <Show when=move || ui.with(|u| u.withdraw_modal_open)>
                    <WithdrawModal
                        account_id=account_id()
                        busy=Signal::derive(move || payments.with(|p| p.submitting_withdrawal))
                        on_submit=on_withdraw
                        on_close=on_close_withdraw
                    />
                </Show>
            </div>
        </Show>
    }
}
