//! One entry of the collector's feedback history.

use leptos::prelude::*;

use ledger::{Feedback, StatusKey};

use crate::util::format;

#[component]
pub fn FeedbackCard(feedback: Feedback) -> impl IntoView {
    let notes = feedback
        .has_admin_notes()
        .then(|| feedback.admin_notes.clone().unwrap_or_default());

    view! {
        <article class="feedback-card">
            <header class="feedback-card__header">
                <span class="feedback-card__category">{feedback.category.label()}</span>
                <span class="feedback-card__stars" title=format!("{} / 5", feedback.stars())>
                    {format::stars(feedback.stars())}
                </span>
                <span class=format::feedback_status_class(feedback.status)>{feedback.status.label()}</span>
            </header>
            <p class="feedback-card__message">{feedback.message.clone()}</p>
            {notes
                .map(|notes| {
                    view! {
                        <blockquote class="feedback-card__notes">
                            <span class="feedback-card__notes-label">"Admin notes"</span>
                            {notes}
                        </blockquote>
                    }
                })}
            <p class="feedback-card__date">{format::date(feedback.created_at.as_deref())}</p>
        </article>
    }
}
