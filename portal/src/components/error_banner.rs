//! Inline failure message with a retry button.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{move || message.get().unwrap_or_default()}</span>
                <button class="btn error-banner__retry" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        </Show>
    }
}
