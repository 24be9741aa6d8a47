//! Email + password sign-in, one route per role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use ledger::Role;
use ledger::validate::validate_login;

use crate::state::session::SessionState;
use crate::util::auth::now_ms;

fn heading(role: Role) -> String {
    format!("{} sign in", role.label())
}

/// The role whose login the "switch" link points at.
fn other_role(role: Role) -> Role {
    match role {
        Role::Customer => Role::Collector,
        Role::Collector => Role::Customer,
    }
}

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if sessions.with(|s| s.active(role, now_ms()).is_some()) {
            navigate_home(role.home_route(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(err) => {
                info.set(err.user_message());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(role, &credentials, now_ms()).await {
                Ok(session) => {
                    info.set(String::new());
                    sessions.update(|s| s.sign_in(&crate::util::storage::BrowserStore, session));
                }
                Err(err) => info.set(err.user_message()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    let switch = other_role(role);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Savings Portal"</h1>
                <p class="login-card__subtitle">{heading(role)}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-switch" href=switch.login_route()>
                    {format!("{} sign in", switch.label())}
                </a>
            </div>
        </div>
    }
}
