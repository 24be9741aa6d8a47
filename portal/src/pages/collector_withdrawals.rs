//! Collector approval queue: the withdrawals of this collector's customers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by the collector session. Rows are scoped to the signed-in
//! collector on load. Approve asks a native confirm; reject collects a reason
//! in a dialog. Both go through [`ledger::review::submit_review`], which
//! re-fetches the list once on success, while the row shows "processing".

#[cfg(test)]
#[path = "collector_withdrawals_test.rs"]
mod collector_withdrawals_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use ledger::review::Decision;
use ledger::{Role, StatusFilter, TxStatus, Withdrawal};

use crate::components::error_banner::ErrorBanner;
use crate::components::list_toolbar::{ListToolbar, status_options};
use crate::components::portal_header::PortalHeader;
use crate::components::reject_dialog::RejectDialog;
use crate::components::withdrawal_card::WithdrawalCard;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::withdrawals::WithdrawalsState;
use crate::util::alive::PageAlive;
use crate::util::auth::{credentials, install_session_guard, now_ms, sign_out};
use crate::util::dialog;

const ROLE: Role = Role::Collector;

/// Heading counter, e.g. "3 pending of 10".
fn queue_summary(pending: usize, total: usize) -> String {
    if total == 0 {
        "No withdrawal requests".to_owned()
    } else {
        format!("{pending} pending of {total}")
    }
}

/// Confirm prompt for approving `withdrawal`, or `None` when the row is gone.
fn approve_prompt(withdrawal: Option<&Withdrawal>) -> Option<String> {
    withdrawal.map(|w| Decision::Approve.confirm_prompt(w))
}

fn load_withdrawals(sessions: RwSignal<SessionState>, withdrawals: RwSignal<WithdrawalsState>, alive: PageAlive) {
    let Some((token, collector_id)) = credentials(sessions, ROLE) else {
        return;
    };
    withdrawals.update(WithdrawalsState::start_loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_withdrawals(&token).await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(items) => withdrawals.update(|w| w.loaded(&collector_id, items)),
            Err(err) => {
                let message = crate::util::auth::handle_failure(sessions, ROLE, &err);
                withdrawals.update(|w| w.failed(message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, collector_id, alive);
    }
}

/// Send one review. A row already in flight is ignored.
fn dispatch_review(
    sessions: RwSignal<SessionState>,
    withdrawals: RwSignal<WithdrawalsState>,
    alive: PageAlive,
    withdrawal_id: String,
    decision: Decision,
) {
    let Some((token, collector_id)) = credentials(sessions, ROLE) else {
        return;
    };
    if !withdrawals.try_update(|w| w.begin_review(&withdrawal_id)).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let desk = crate::net::api::HttpDesk::new(token);
        let result = ledger::review::submit_review(&desk, &withdrawal_id, &decision).await;
        let effect = withdrawals
            .try_update(|w| w.apply_review(&withdrawal_id, &collector_id, result))
            .unwrap_or_default();
        if effect.sign_out {
            sign_out(sessions, ROLE);
        }
        if alive.is_alive() {
            if let Some(message) = effect.alert {
                dialog::alert(&message);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, collector_id, decision, alive);
        withdrawals.update(|w| w.tracker.finish(&withdrawal_id));
    }
}

#[component]
pub fn CollectorWithdrawalsPage() -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionState>>();
    let withdrawals = expect_context::<RwSignal<WithdrawalsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let alive = PageAlive::for_current_page();

    let load = {
        let alive = alive.clone();
        move || load_withdrawals(sessions, withdrawals, alive.clone())
    };
    install_session_guard(ROLE, sessions, use_navigate(), {
        let load = load.clone();
        move |_| load()
    });
    on_cleanup(move || ui.update(UiState::close_all));

    let on_retry = Callback::new(move |()| load());
    let on_logout = Callback::new(move |()| {
        withdrawals.set(WithdrawalsState::default());
        sign_out(sessions, ROLE);
    });

    let on_approve = {
        let alive = alive.clone();
        Callback::new(move |id: String| {
            let Some(prompt) = withdrawals.with_untracked(|w| approve_prompt(w.find(&id).as_ref())) else {
                return;
            };
            if dialog::confirm(&prompt) {
                dispatch_review(sessions, withdrawals, alive.clone(), id, Decision::Approve);
            }
        })
    };
    let on_reject = Callback::new(move |id: String| ui.update(|u| u.open_reject(&id)));
    let on_close_reject = Callback::new(move |()| ui.update(UiState::close_reject));
    let on_confirm_reject = Callback::new(move |reason: String| {
        let Some(id) = ui.with_untracked(|u| u.reject_target.clone()) else {
            return;
        };
        ui.update(UiState::close_reject);
        dispatch_review(sessions, withdrawals, alive.clone(), id, Decision::Reject { reason });
    });

    let user_name = Signal::derive(move || {
        sessions.with(|s| s.get(ROLE).map(|s| s.user.name.clone()).unwrap_or_default())
    });

    view! {
        <Show
            when=move || sessions.with(|s| s.active(ROLE, now_ms()).is_some())
            fallback=move || view! { <div class="dashboard-page"><p>"Checking your session..."</p></div> }
        >
            <div class="dashboard-page dashboard-page--collector">
                <PortalHeader role=ROLE user_name=user_name on_logout=on_logout/>

                <h1 class="dashboard-page__title">
                    "Withdrawal requests "
                    <span class="dashboard-page__count">
                        {move || withdrawals.with(|w| queue_summary(w.pending_count(), w.items.len()))}
                    </span>
                </h1>

                <ErrorBanner message=Signal::derive(move || withdrawals.with(|w| w.error.clone())) on_retry=on_retry/>

                <ListToolbar
                    search=Signal::derive(move || withdrawals.with(|w| w.query.search.clone()))
                    status_key=Signal::derive(move || withdrawals.with(|w| w.query.status.key()))
                    options={status_options::<TxStatus>()}
                    on_search=Callback::new(move |value: String| withdrawals.update(|w| w.query.search = value))
                    on_status=Callback::new(move |key: String| {
                        withdrawals.update(|w| w.query.status = StatusFilter::from_key(&key));
                    })
                    placeholder="Search by customer, account or reason"
                />

                <Show
                    when=move || !withdrawals.with(|w| w.loading)
                    fallback=move || view! { <p>"Loading withdrawals..."</p> }
                >
                    <div class="dashboard-page__list">
                        {move || {
                            let visible = withdrawals.with(WithdrawalsState::visible);
                            if visible.is_empty() {
                                return view! { <p class="dashboard-page__empty">"No withdrawals to show."</p> }
                                    .into_any();
                            }
                            visible
                                .into_iter()
                                .map(|withdrawal| {
                                    let id = withdrawal.id.clone();
                                    let processing = Signal::derive(move || withdrawals.with(|w| w.is_processing(&id)));
                                    view! {
                                        <WithdrawalCard
                                            withdrawal=withdrawal
                                            processing=processing
                                            on_approve=on_approve
                                            on_reject=on_reject
                                        />
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </Show>

                {move || {
                    ui.with(|u| u.reject_target.clone())
                        .and_then(|id| withdrawals.with(|w| w.find(&id)))
                        .map(|withdrawal| {
                            view! {
                                <RejectDialog
                                    withdrawal=withdrawal
                                    on_confirm=on_confirm_reject
                                    on_close=on_close_reject
                                />
                            }
                        })
                }}
            </div>
        </Show>
    }
}
