//! Form state management

use leptos::prelude::*;
use lib_form::{
    check_form_with, submit_with, FieldName, FormInput, FormRules, FormSnapshot, Submission,
    SubmitError,
};

/// Global form context
///
/// `snapshot` is always the result of the latest pass over `input`, so the
/// field affordances rendered from it can never go stale.
#[derive(Clone, Copy)]
pub struct FeedbackContext {
    pub input: RwSignal<FormInput>,
    pub snapshot: RwSignal<FormSnapshot>,
    pub submission: RwSignal<Option<Submission>>,
    rules: StoredValue<FormRules>,
}

impl FeedbackContext {
    pub fn new(rules: FormRules) -> Self {
        Self {
            input: RwSignal::new(FormInput::default()),
            snapshot: RwSignal::new(FormSnapshot::default()),
            submission: RwSignal::new(None),
            rules: StoredValue::new(rules),
        }
    }

    pub fn value(&self, field: FieldName) -> String {
        self.input.with(|input| input.get(field).to_string())
    }

    pub fn submit_enabled(&self) -> bool {
        self.snapshot.with(|snapshot| snapshot.submit_enabled())
    }

    /// Apply one input event: store the raw value and re-check the whole form.
    pub fn update(&self, field: FieldName, value: String) {
        let previous = self.snapshot.get_untracked();
        let mut input = self.input.get_untracked();
        input.set(field, value);

        let next = self.rules.with_value(|rules| check_form_with(&mut input, rules));
        for changed in next.changed_fields(&previous) {
            match next.state(changed).error() {
                Some(err) => log::debug!("{} invalid ({:?}): {}", changed, err.kind(), err),
                None => log::debug!("{} now {:?}", changed, next.state(changed)),
            }
        }

        // The phone mask may have rewritten the value, so always push it back.
        self.input.set(input);
        self.snapshot.set(next);
    }

    /// Handle a submit event.
    ///
    /// On success the summary is stored and the form returns to its initial,
    /// untouched state. On failure the failing pass is displayed.
    pub fn submit(&self) -> Result<(), SubmitError> {
        let mut input = self.input.get_untracked();
        let result = self.rules.with_value(|rules| submit_with(&mut input, rules));
        self.input.set(input);

        match result {
            Ok(submission) => {
                self.snapshot.set(FormSnapshot::default());
                self.submission.set(Some(submission));
                Ok(())
            }
            Err(err) => {
                let SubmitError::Invalid(snapshot) = &err;
                self.snapshot.set(*snapshot);
                Err(err)
            }
        }
    }
}

pub fn provide_feedback_context(rules: FormRules) -> FeedbackContext {
    let context = FeedbackContext::new(rules);
    provide_context(context);
    context
}

pub fn use_feedback_context() -> FeedbackContext {
    expect_context::<FeedbackContext>()
}
