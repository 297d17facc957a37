//! Validated input field
//!
//! Renders one form input with its validity affordance and, when invalid, a
//! single error message directly after it. Both are derived from the current
//! snapshot, so fixing the value removes the message on the same pass.

use leptos::prelude::*;
use lib_form::{FieldName, FieldState};

use crate::state::form::use_feedback_context;

/// CSS class for a field state.
pub fn field_class(state: FieldState) -> &'static str {
    match state {
        FieldState::Untouched => "field",
        FieldState::Valid => "field field-valid",
        FieldState::Invalid(_) => "field field-error",
    }
}

/// `type` and `inputmode` attributes for a field.
///
/// Ratings stay `type="text"`: a number input reports `""` for partial text such
/// as `-` or `1e`, and writing that back would wipe the keystroke.
pub fn input_kind(field: FieldName) -> (&'static str, Option<&'static str>) {
    match field {
        FieldName::Email => ("email", None),
        FieldName::Phone => ("tel", Some("tel")),
        FieldName::Rating1 | FieldName::Rating2 | FieldName::Rating3 => ("text", Some("decimal")),
        FieldName::Name | FieldName::Surname | FieldName::Address => ("text", None),
    }
}

#[component]
pub fn FieldInput(field: FieldName, label: &'static str) -> impl IntoView {
    let ctx = use_feedback_context();
    let (input_type, input_mode) = input_kind(field);
    let state = move || ctx.snapshot.with(|snapshot| snapshot.state(field));

    view! {
        <div class="form-group">
            <label for=field.as_str()>{label}</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                inputmode=input_mode
                class=move || field_class(state())
                prop:value=move || ctx.value(field)
                on:input=move |ev| ctx.update(field, event_target_value(&ev))
            />
            {move || {
                state()
                    .error()
                    .map(|err| view! { <small class="error-text">{err.to_string()}</small> })
            }}
        </div>
    }
}
