//! Top bar for both dashboards: title, role navigation, user name, logout.

#[cfg(test)]
#[path = "portal_header_test.rs"]
mod portal_header_test;

use leptos::prelude::*;

use ledger::Role;

/// `(href, label)` navigation entries for `role`.
pub fn nav_links(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Customer => &[("/customer", "Overview")],
        Role::Collector => &[("/collector", "Withdrawals"), ("/collector/feedback", "Feedback")],
    }
}

#[component]
pub fn PortalHeader(role: Role, #[prop(into)] user_name: Signal<String>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="portal-header toolbar">
            <span class="portal-header__title">{format!("{} Portal", role.label())}</span>
            <nav class="portal-header__nav">
                {nav_links(role)
                    .iter()
                    .map(|(href, label)| view! { <a class="portal-header__link" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="portal-header__user">{move || user_name.get()}</span>
            <button class="btn portal-header__logout" on:click=move |_| on_logout.run(()) title="Logout">
                "Logout"
            </button>
        </header>
    }
}
