//! # Feedback Form Library
//!
//! Validation rules and submit handling for the feedback form, kept free of any
//! DOM access so the same logic runs in the browser and under `cargo test`.
//!
//! ## Structure
//!
//! - **[`field`]**: The eight form fields and their derived state
//! - **[`validation`]**: Per-field validators (name, email, address, ratings)
//! - **[`phone`]**: Lithuanian phone normalization and display mask
//! - **[`form`]**: Whole-form checks, snapshots and submission
//! - **[`summary`]**: Average rating and tier colour of a submission
//! - **[`rules`]**: Tunable constants of the rule set
//! - **[`error`]**: Field, submit and configuration errors
//!
//! ## Usage
//!
//! ```rust
//! use lib_form::{check_form, FieldName, FormInput};
//!
//! let mut input = FormInput::default();
//! input.set(FieldName::Phone, "370600123 45");
//!
//! let snapshot = check_form(&mut input);
//! assert_eq!(input.get(FieldName::Phone), "+370 600 12345");
//! assert!(snapshot.state(FieldName::Phone).is_valid());
//! assert!(!snapshot.submit_enabled());
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod phone;
pub mod rules;
pub mod summary;
pub mod validation;

pub use error::{ErrorKind, FieldError, Result, RulesError, SubmitError};
pub use field::{FieldName, FieldState};
pub use form::{check_form, check_form_with, submit, submit_with, FormInput, FormSnapshot};
pub use phone::{format_phone, is_valid_phone, normalize_phone, validate_phone, PhoneCheck};
pub use rules::FormRules;
pub use summary::{RatingTier, Submission};
pub use validation::{
    validate_address, validate_email, validate_name, validate_rating, validate_ratings,
    validate_surname,
};
