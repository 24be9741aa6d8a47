//! Search box + status select shared by every list screen.
//!
//! The toolbar only reports input; filtering itself is
//! [`ledger::filter::apply_query`], run by the owning state struct.

#[cfg(test)]
#[path = "list_toolbar_test.rs"]
mod list_toolbar_test;

use leptos::prelude::*;

use ledger::{StatusFilter, StatusKey};

/// `(key, label)` pairs for the status select, "all" first.
pub fn status_options<S: StatusKey>() -> Vec<(&'static str, &'static str)> {
    std::iter::once((StatusFilter::<S>::ALL_KEY, "All statuses"))
        .chain(S::ALL.iter().map(|s| (s.key(), s.label())))
        .collect()
}

#[component]
pub fn ListToolbar(
    #[prop(into)] search: Signal<String>,
    #[prop(into)] status_key: Signal<&'static str>,
    options: Vec<(&'static str, &'static str)>,
    on_search: Callback<String>,
    on_status: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search…".to_owned());

    view! {
        <div class="list-toolbar">
            <input
                class="list-toolbar__search"
                type="search"
                placeholder=placeholder
                prop:value=move || search.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <select
                class="list-toolbar__status"
                on:change=move |ev| on_status.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(key, label)| {
                        view! {
                            <option value=key selected=move || status_key.get() == key>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
