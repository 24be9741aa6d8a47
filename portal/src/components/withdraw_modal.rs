//! Customer withdrawal request form.

use leptos::prelude::*;

use ledger::WithdrawalRequest;
use ledger::validate::validate_withdrawal_request;

#[component]
pub fn WithdrawModal(
    account_id: Option<String>,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<WithdrawalRequest>,
    on_close: Callback<()>,
) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let checked = validate_withdrawal_request(
            &amount.get_untracked(),
            &reason.get_untracked(),
            account_id.as_deref(),
        );
        match checked {
            Ok(request) => {
                error.set(None);
                on_submit.run(request);
            }
            Err(err) => error.set(Some(err.user_message())),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--withdraw"
                on:click=move |ev| ev.stop_propagation()
                on:submit=on_form_submit
            >
                <h2>"Request withdrawal"</h2>
                <label class="dialog__field">
                    <span>"Amount"</span>
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__field">
                    <span>"Reason"</span>
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.with(Option::is_some)>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting…" } else { "Submit request" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
