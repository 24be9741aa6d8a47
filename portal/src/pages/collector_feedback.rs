//! Collector feedback: history of messages sent to the admin plus a form to
//! send a new one.

#[cfg(test)]
#[path = "collector_feedback_test.rs"]
mod collector_feedback_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use ledger::{FeedbackDraft, FeedbackStatus, Role, StatusFilter, StatusKey};

use crate::components::error_banner::ErrorBanner;
use crate::components::feedback_card::FeedbackCard;
use crate::components::feedback_modal::FeedbackModal;
use crate::components::list_toolbar::{ListToolbar, status_options};
use crate::components::portal_header::PortalHeader;
use crate::state::feedback::FeedbackState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::alive::PageAlive;
use crate::util::auth::{credentials, install_session_guard, now_ms, sign_out};

const ROLE: Role = Role::Collector;

fn submitted_message(server_message: Option<String>) -> String {
    server_message.unwrap_or_else(|| "Thank you! Your feedback was sent.".to_owned())
}

/// `(label, count)` chips shown above the list.
fn status_counts(state: &FeedbackState) -> Vec<(&'static str, usize)> {
    FeedbackStatus::ALL
        .iter()
        .map(|&status| (status.label(), state.count(status)))
        .collect()
}

fn load_feedback(sessions: RwSignal<SessionState>, feedback: RwSignal<FeedbackState>, alive: PageAlive) {
    let Some((token, _)) = credentials(sessions, ROLE) else {
        return;
    };
    feedback.update(FeedbackState::start_loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_my_feedback(&token).await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(items) => feedback.update(|f| f.loaded(items)),
            Err(err) => {
                let message = crate::util::auth::handle_failure(sessions, ROLE, &err);
                feedback.update(|f| f.failed(message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, alive);
    }
}

#[component]
pub fn CollectorFeedbackPage() -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionState>>();
    let feedback = expect_context::<RwSignal<FeedbackState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let alive = PageAlive::for_current_page();

    let load = {
        let alive = alive.clone();
        move || load_feedback(sessions, feedback, alive.clone())
    };
    install_session_guard(ROLE, sessions, use_navigate(), {
        let load = load.clone();
        move |_| load()
    });
    on_cleanup(move || ui.update(UiState::close_all));

    let on_retry = Callback::new(move |()| load());
    let on_logout = Callback::new(move |()| {
        feedback.set(FeedbackState::default());
        sign_out(sessions, ROLE);
    });
    let on_close_modal = Callback::new(move |()| ui.update(UiState::close_feedback));

    let on_submit = Callback::new(move |draft: FeedbackDraft| {
        let Some((token, _)) = credentials(sessions, ROLE) else {
            return;
        };
        if feedback.with_untracked(|f| f.submitting) {
            return;
        }
        feedback.update(|f| f.submitting = true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_feedback(&token, &draft).await;
                feedback.update(|f| f.submitting = false);
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(message) => {
                        ui.update(UiState::close_feedback);
                        crate::util::dialog::alert(&submitted_message(message));
                        load_feedback(sessions, feedback, alive);
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
            let _ = (token, draft);
            feedback.update(|f| f.submitting = false);
        }
    });

    let user_name = Signal::derive(move || {
        sessions.with(|s| s.get(ROLE).map(|s| s.user.name.clone()).unwrap_or_default())
    });

    view! {
        <Show
            when=move || sessions.with(|s| s.active(ROLE, now_ms()).is_some())
            fallback=move || view! { <div class="dashboard-page"><p>"Checking your session..."</p></div> }
        >
            <div class="dashboard-page dashboard-page--feedback">
                <PortalHeader role=ROLE user_name=user_name on_logout=on_logout/>

                <header class="dashboard-page__title-row">
                    <h1 class="dashboard-page__title">"My feedback"</h1>
                    <button class="btn btn--primary" on:click=move |_| ui.update(UiState::open_feedback)>
                        "New feedback"
                    </button>
                </header>

                <div class="status-chips">
                    {move || {
                        feedback
                            .with(status_counts)
                            .into_iter()
                            .map(|(label, count)| view! { <span class="status-chip">{label} ": " {count}</span> })
                            .collect_view()
                    }}
                </div>

                <ErrorBanner message=Signal::derive(move || feedback.with(|f| f.error.clone())) on_retry=on_retry/>

                <ListToolbar
                    search=Signal::derive(move || feedback.with(|f| f.query.search.clone()))
                    status_key=Signal::derive(move || feedback.with(|f| f.query.status.key()))
                    options={status_options::<FeedbackStatus>()}
                    on_search=Callback::new(move |value: String| feedback.update(|f| f.query.search = value))
                    on_status=Callback::new(move |key: String| {
                        feedback.update(|f| f.query.status = StatusFilter::from_key(&key));
                    })
                    placeholder="Search feedback"
                />

                <Show
                    when=move || !feedback.with(|f| f.loading)
                    fallback=move || view! { <p>"Loading feedback..."</p> }
                >
                    <div class="dashboard-page__list">
                        {move || {
                            let visible = feedback.with(FeedbackState::visible);
                            if visible.is_empty() {
                                return view! { <p class="dashboard-page__empty">"No feedback yet."</p> }.into_any();
                            }
                            visible
                                .into_iter()
                                .map(|item| view! { <FeedbackCard feedback=item/> })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </Show>

                <Show when=move || ui.with(|u| u.feedback_modal_open)>
                    <FeedbackModal
                        busy=Signal::derive(move || feedback.with(|f| f.submitting))
                        on_submit=on_submit
                        on_close=on_close_modal
                    />
                </Show>
            </div>
        </Show>
    }
}
