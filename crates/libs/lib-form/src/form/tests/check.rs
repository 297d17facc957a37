//! # Check Tests
//!
//! Tests for the per-event validation pass.

use super::*;
use crate::error::FieldError;

#[test]
fn test_check_valid_form_enables_submit() {
    let mut input = valid_input(["5", "8", "10"]);

    let snapshot = check_form(&mut input);

    assert!(snapshot.submit_enabled());
    assert!(snapshot.invalid_fields().is_empty());
    assert_eq!(input.phone, "+370 860 01234");
}

#[test]
fn test_check_reports_every_invalid_field() {
    // Arrange: first field already fails, later ones must still be evaluated
    let mut input = FormInput {
        name: String::new(),
        surname: "Jonaitis".to_string(),
        email: "not-an-email".to_string(),
        address: "abc".to_string(),
        phone: "12345".to_string(),
        rating1: "0".to_string(),
        rating2: "5".to_string(),
        rating3: "11".to_string(),
    };

    // Act
    let snapshot = check_form(&mut input);

    // Assert
    assert!(!snapshot.submit_enabled());
    assert_eq!(snapshot.state(FieldName::Name), FieldState::Invalid(FieldError::NameRequired));
    assert_eq!(snapshot.state(FieldName::Surname), FieldState::Valid);
    assert_eq!(snapshot.state(FieldName::Email), FieldState::Invalid(FieldError::InvalidEmail));
    assert_eq!(snapshot.state(FieldName::Address), FieldState::Invalid(FieldError::AddressTooShort));
    assert_eq!(snapshot.state(FieldName::Phone), FieldState::Invalid(FieldError::InvalidPhone));
    assert_eq!(snapshot.state(FieldName::Rating1), FieldState::Invalid(FieldError::RatingOutOfRange));
    assert_eq!(snapshot.state(FieldName::Rating2), FieldState::Valid);
    assert_eq!(snapshot.state(FieldName::Rating3), FieldState::Invalid(FieldError::RatingOutOfRange));
    assert_eq!(input.phone, "+370 123 45");
}

#[test]
fn test_check_is_idempotent() {
    let mut input = valid_input(["3", "", "9"]);
    input.set(FieldName::Email, "a@b");

    let first = check_form(&mut input);
    let after_first = input.clone();
    let second = check_form(&mut input);

    assert_eq!(first, second);
    assert_eq!(input, after_first);
    assert!(second.changed_fields(&first).is_empty());
    assert_eq!(second.invalid_fields(), vec![FieldName::Email, FieldName::Rating2]);
}

#[test]
fn test_fixing_a_field_clears_its_error() {
    let mut input = valid_input(["5", "5", "5"]);
    input.set(FieldName::Address, "abcd");
    let before = check_form(&mut input);
    assert_eq!(before.state(FieldName::Address).error(), Some(FieldError::AddressTooShort));

    input.set(FieldName::Address, "abcde");
    let after = check_form(&mut input);

    assert_eq!(after.state(FieldName::Address), FieldState::Valid);
    assert_eq!(after.state(FieldName::Address).error(), None);
    assert_eq!(after.changed_fields(&before), vec![FieldName::Address]);
    assert!(after.submit_enabled());
}

#[test]
fn test_first_pass_moves_every_field_out_of_untouched() {
    let untouched = FormSnapshot::default();
    assert!(!untouched.submit_enabled());
    assert!(untouched.invalid_fields().is_empty());

    let mut input = FormInput::default();
    input.set(FieldName::Name, "J");
    let snapshot = check_form(&mut input);

    for field in FieldName::ALL {
        assert_ne!(snapshot.state(field), FieldState::Untouched, "{} untouched", field);
    }
    assert_eq!(snapshot.changed_fields(&untouched).len(), FieldName::ALL.len());
}

#[test]
fn test_phone_mask_applied_on_each_keystroke() {
    let mut input = FormInput::default();

    for (typed, shown) in [("3", "+370 3"), ("+370 36", "+370 36"), ("+370 3601", "+370 360 1")] {
        input.set(FieldName::Phone, typed);
        check_form(&mut input);
        assert_eq!(input.phone, shown);
    }
}

#[test]
fn test_check_with_custom_rules() {
    let rules = FormRules { rating_max: 5.0, ..FormRules::default() };
    let mut input = valid_input(["5", "6", "1"]);

    let snapshot = check_form_with(&mut input, &rules);

    assert_eq!(snapshot.invalid_fields(), vec![FieldName::Rating2]);
}
