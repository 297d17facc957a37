//! # Form Errors
//!
//! Three error types, one per concern:
//!
//! - [`FieldError`] - a single field failed its rule. The `Display` text is the
//!   exact message shown next to the input.
//! - [`SubmitError`] - a submit was attempted while the form was invalid.
//! - [`RulesError`] - a [`FormRules`](crate::rules::FormRules) configuration could
//!   not be parsed or is inconsistent.
//!
//! Field errors fall into two kinds (see [`ErrorKind`]): a required field left
//! blank, or a value present but of the wrong shape or range. Both are shown the
//! same way; the kind only exists for callers that want to tell them apart.

use thiserror::Error;

use crate::form::FormSnapshot;

/// Convenience alias for results carrying a [`RulesError`].
pub type Result<T> = std::result::Result<T, RulesError>;

/// Classification of a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required field left blank
    Missing,
    /// Value present but fails its shape or range rule
    Malformed,
}

/// A failed field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name required")]
    NameRequired,

    #[error("Surname required")]
    SurnameRequired,

    #[error("Only letters allowed")]
    OnlyLetters,

    #[error("Email required")]
    EmailRequired,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Address too short")]
    AddressTooShort,

    #[error("Invalid Lithuanian number")]
    InvalidPhone,

    #[error("1–10 only")]
    RatingOutOfRange,
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::NameRequired | FieldError::SurnameRequired | FieldError::EmailRequired => {
                ErrorKind::Missing
            }
            FieldError::OnlyLetters
            | FieldError::InvalidEmail
            | FieldError::AddressTooShort
            | FieldError::InvalidPhone
            | FieldError::RatingOutOfRange => ErrorKind::Malformed,
        }
    }
}

/// Submit rejected; carries the snapshot from the validation pass that failed.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.invalid_fields().len())]
    Invalid(FormSnapshot),
}

/// Rule set configuration errors.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Failed to parse form rules: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid form rules: {0}")]
    Invalid(String),
}
