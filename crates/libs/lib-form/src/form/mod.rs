//! # Form Check and Submit
//!
//! [`check_form`] is the single validation pass run on every input event. It
//! evaluates every field (no short-circuit, so every error is shown at once),
//! writes the phone mask back into the input, and returns an immutable
//! [`FormSnapshot`]. A renderer keeps the previous snapshot and redraws the
//! fields returned by [`FormSnapshot::changed_fields`].
//!
//! [`submit`] runs the same pass; when it succeeds it builds the
//! [`Submission`] and clears the input.

use tracing::{debug, info};

use crate::error::{FieldError, SubmitError};
use crate::field::{FieldName, FieldState};
use crate::phone::validate_phone_with;
use crate::rules::FormRules;
use crate::summary::{average_rating, RatingTier, Submission};
use crate::validation::{
    validate_address_with, validate_email, validate_name, validate_ratings_with, validate_surname,
};

#[cfg(test)]
mod tests;

/// Raw values of all form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub rating1: String,
    pub rating2: String,
    pub rating3: String,
}

impl FormInput {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Surname => &self.surname,
            FieldName::Email => &self.email,
            FieldName::Address => &self.address,
            FieldName::Phone => &self.phone,
            FieldName::Rating1 => &self.rating1,
            FieldName::Rating2 => &self.rating2,
            FieldName::Rating3 => &self.rating3,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Surname => &mut self.surname,
            FieldName::Email => &mut self.email,
            FieldName::Address => &mut self.address,
            FieldName::Phone => &mut self.phone,
            FieldName::Rating1 => &mut self.rating1,
            FieldName::Rating2 => &mut self.rating2,
            FieldName::Rating3 => &mut self.rating3,
        };
        *slot = value.into();
    }

    pub fn ratings(&self) -> [&str; 3] {
        [&self.rating1, &self.rating2, &self.rating3]
    }

    /// Empty every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Field states from one validation pass.
///
/// The default snapshot has every field `Untouched` and submit disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    states: [FieldState; 8],
}

impl FormSnapshot {
    pub fn state(&self, field: FieldName) -> FieldState {
        self.states[field.index()]
    }

    /// True iff every field is valid.
    pub fn submit_enabled(&self) -> bool {
        self.states.iter().all(FieldState::is_valid)
    }

    pub fn invalid_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.state(*field).error().is_some())
            .collect()
    }

    /// Fields whose state differs from `previous`.
    pub fn changed_fields(&self, previous: &FormSnapshot) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.state(*field) != previous.state(*field))
            .collect()
    }

    fn set(&mut self, field: FieldName, state: FieldState) {
        self.states[field.index()] = state;
    }
}

pub fn check_form(input: &mut FormInput) -> FormSnapshot {
    check_form_with(input, &FormRules::default())
}

/// Validate every field and apply the phone mask to `input.phone`.
///
/// Repeating the call on unchanged input yields the same snapshot and leaves the
/// input untouched, since the mask is stable under reapplication.
pub fn check_form_with(input: &mut FormInput, rules: &FormRules) -> FormSnapshot {
    run_checks(input, rules).0
}

/// One validation pass; also hands back the parsed ratings for submit.
fn run_checks(
    input: &mut FormInput,
    rules: &FormRules,
) -> (FormSnapshot, [Result<f64, FieldError>; 3]) {
    let mut snapshot = FormSnapshot::default();

    snapshot.set(FieldName::Name, validate_name(&input.name).into());
    snapshot.set(FieldName::Surname, validate_surname(&input.surname).into());
    snapshot.set(FieldName::Email, validate_email(&input.email).into());
    snapshot.set(FieldName::Address, validate_address_with(&input.address, rules).into());

    let phone = validate_phone_with(&input.phone, rules);
    if let Some(display) = phone.display {
        input.phone = display;
    }
    snapshot.set(FieldName::Phone, phone.result.into());

    let ratings = validate_ratings_with(input.ratings(), rules);
    for (field, result) in FieldName::RATINGS.into_iter().zip(ratings) {
        snapshot.set(field, result.into());
    }

    debug!(
        invalid = snapshot.invalid_fields().len(),
        submit_enabled = snapshot.submit_enabled(),
        "form checked"
    );

    (snapshot, ratings)
}

pub fn submit(input: &mut FormInput) -> Result<Submission, SubmitError> {
    submit_with(input, &FormRules::default())
}

/// Handle a submit.
///
/// On failure the input is left as checked (phone masked) and the failing
/// snapshot is returned in the error. On success the input is reset; the form
/// is then back to [`FormSnapshot::default()`].
pub fn submit_with(input: &mut FormInput, rules: &FormRules) -> Result<Submission, SubmitError> {
    let (snapshot, ratings) = run_checks(input, rules);
    let values = match (snapshot.submit_enabled(), ratings) {
        (true, [Ok(r1), Ok(r2), Ok(r3)]) => [r1, r2, r3],
        _ => {
            debug!(invalid = ?snapshot.invalid_fields(), "submit rejected");
            return Err(SubmitError::Invalid(snapshot));
        }
    };

    let average = average_rating(values);
    let tier = RatingTier::for_average(average, rules);

    let submission = Submission {
        full_name: format!("{} {}", input.name, input.surname),
        email: input.email.clone(),
        phone: input.phone.clone(),
        address: input.address.clone(),
        ratings: [
            input.rating1.clone(),
            input.rating2.clone(),
            input.rating3.clone(),
        ],
        average,
        tier,
    };

    info!(average, tier = tier.color(), "feedback submitted");
    input.reset();

    Ok(submission)
}
