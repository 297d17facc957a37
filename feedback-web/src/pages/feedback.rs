//! Feedback Page - contact details and three ratings

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_form::FieldName;

use crate::components::{FieldInput, ResultsPanel};
use crate::state::form::use_feedback_context;
use crate::utils::browser::notify;
use crate::utils::constants::SUBMIT_NOTICE;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let ctx = use_feedback_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match ctx.submit() {
            Ok(()) => notify(SUBMIT_NOTICE),
            Err(e) => log::debug!("Submit blocked: {}", e),
        }
    };

    view! {
        <section class="feedback">
            <form class="feedback-form" novalidate=true on:submit=on_submit>
                <FieldInput field=FieldName::Name label="Name"/>
                <FieldInput field=FieldName::Surname label="Surname"/>
                <FieldInput field=FieldName::Email label="Email"/>
                <FieldInput field=FieldName::Address label="Address"/>
                <FieldInput field=FieldName::Phone label="Phone"/>
                <FieldInput field=FieldName::Rating1 label="Rating 1"/>
                <FieldInput field=FieldName::Rating2 label="Rating 2"/>
                <FieldInput field=FieldName::Rating3 label="Rating 3"/>
                <button type="submit" class="btn" prop:disabled=move || !ctx.submit_enabled()>
                    "Submit"
                </button>
            </form>
            <ResultsPanel/>
        </section>
    }
}
