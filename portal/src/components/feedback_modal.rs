//! Collector feedback form: category, 1-5 rating, free text.

use leptos::prelude::*;

use ledger::validate::{MAX_FEEDBACK_CHARS, validate_feedback};
use ledger::{FeedbackCategory, FeedbackDraft, Rating};

#[component]
pub fn FeedbackModal(
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<FeedbackDraft>,
    on_close: Callback<()>,
) -> impl IntoView {
    let category = RwSignal::new(String::new());
    let rating = RwSignal::new(Rating::MAX);
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let checked = validate_feedback(
            &message.get_untracked(),
            rating.get_untracked(),
            FeedbackCategory::from_key(&category.get_untracked()),
        );
        match checked {
            Ok(draft) => {
                error.set(None);
                on_submit.run(draft);
            }
            Err(err) => error.set(Some(err.user_message())),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--feedback"
                on:click=move |ev| ev.stop_propagation()
                on:submit=on_form_submit
            >
                <h2>"Send feedback"</h2>
                <label class="dialog__field">
                    <span>"Category"</span>
                    <select class="dialog__input" on:change=move |ev| category.set(event_target_value(&ev))>
                        <option value="" selected=move || category.with(String::is_empty)>
                            "Choose a category"
                        </option>
                        {FeedbackCategory::SELECTABLE
                            .iter()
                            .map(|c| view! { <option value=c.key()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="dialog__field dialog__rating">
                    <span>"Rating"</span>
                    {(Rating::MIN..=Rating::MAX)
                        .map(|value| {
                            view! {
                                <button
                                    type="button"
                                    class="dialog__star"
                                    class:dialog__star--on={move || rating.get() >= value}
                                    on:click=move |_| rating.set(value)
                                >
                                    "★"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <label class="dialog__field">
                    <span>"Message"</span>
                    <textarea
                        class="dialog__input"
                        rows="5"
                        maxlength=MAX_FEEDBACK_CHARS.to_string()
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <p class="dialog__hint">
                    {move || format!("{}/{MAX_FEEDBACK_CHARS}", message.with(|m| m.chars().count()))}
                </p>
                <Show when=move || error.with(Option::is_some)>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending…" } else { "Send feedback" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
