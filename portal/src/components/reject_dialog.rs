//! Dialog collecting the mandatory reason for rejecting a withdrawal.

use leptos::prelude::*;

use ledger::Withdrawal;
use ledger::validate::{MIN_REJECTION_REASON_CHARS, validate_rejection_reason};

use crate::util::format;

#[component]
pub fn RejectDialog(withdrawal: Withdrawal, on_confirm: Callback<String>, on_close: Callback<()>) -> impl IntoView {
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_rejection_reason(&reason.get_untracked()) {
            Ok(reason) => on_confirm.run(reason),
            Err(err) => error.set(Some(err.user_message())),
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let typed = move || reason.with(|r| r.trim().chars().count());
    let subject = format!(
        "{} · {}",
        withdrawal.customer_name.clone().unwrap_or_else(|| "Unknown customer".to_owned()),
        format::amount(withdrawal.amount)
    );

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--reject"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                on:submit=on_submit
            >
                <h2>"Reject withdrawal"</h2>
                <p class="dialog__subject">{subject}</p>
                <textarea
                    class="dialog__input"
                    rows="4"
                    placeholder="Why is this request being rejected?"
                    prop:value=move || reason.get()
                    on:input=move |ev| {
                        reason.set(event_target_value(&ev));
                        error.set(None);
                    }
                ></textarea>
                <p class="dialog__hint">
                    {move || format!("{}/{MIN_REJECTION_REASON_CHARS} characters minimum", typed())}
                </p>
                <Show when=move || error.with(Option::is_some)>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--danger" type="submit">"Reject"</button>
                </div>
            </form>
        </div>
    }
}
