//! # Field Validators
//!
//! Pure, total validators for the text and rating fields. Each takes the raw
//! input value and returns `Ok` or the [`FieldError`] to display. The phone field
//! lives in [`crate::phone`] because it also rewrites the displayed value.
//!
//! Functions with a `_with` suffix take explicit [`FormRules`]; the plain names
//! use [`FormRules::default()`].

use lazy_regex::regex_is_match;

use crate::error::FieldError;
use crate::rules::FormRules;

fn validate_person_name(value: &str, required: FieldError) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(required);
    }

    if !regex_is_match!(r"^[A-Za-z\s]+$", value) {
        return Err(FieldError::OnlyLetters);
    }

    Ok(())
}

/// Validate the first name: required, ASCII letters and whitespace only.
///
/// ```rust
/// use lib_form::{validate_name, FieldError};
///
/// assert!(validate_name("Ona Marija").is_ok());
/// assert_eq!(validate_name("   "), Err(FieldError::NameRequired));
/// assert_eq!(validate_name("R2D2"), Err(FieldError::OnlyLetters));
/// ```
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    validate_person_name(value, FieldError::NameRequired)
}

/// Validate the surname with the same rules as [`validate_name`].
pub fn validate_surname(value: &str) -> Result<(), FieldError> {
    validate_person_name(value, FieldError::SurnameRequired)
}

/// Validate a basic `local@domain.tld` shape with no whitespace.
///
/// ```rust
/// use lib_form::{validate_email, FieldError};
///
/// assert!(validate_email("a@b.co").is_ok());
/// assert_eq!(validate_email("a@b"), Err(FieldError::InvalidEmail));
/// assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
/// ```
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }

    if !regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", value) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_address(value: &str) -> Result<(), FieldError> {
    validate_address_with(value, &FormRules::default())
}

/// Validate that the trimmed address has at least `rules.address_min_len` characters.
pub fn validate_address_with(value: &str, rules: &FormRules) -> Result<(), FieldError> {
    if value.trim().chars().count() < rules.address_min_len {
        return Err(FieldError::AddressTooShort);
    }
    Ok(())
}

pub fn validate_rating(raw: &str) -> Result<f64, FieldError> {
    validate_rating_with(raw, &FormRules::default())
}

/// Interpret a rating input as a number and check it against the rating range.
///
/// Surrounding whitespace is ignored and an empty input reads as zero, which is
/// never accepted. Decimals are allowed. Returns the parsed value on success.
pub fn validate_rating_with(raw: &str, rules: &FormRules) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse::<f64>().map_err(|_| FieldError::RatingOutOfRange)?
    };

    if !value.is_finite() || value == 0.0 || value < rules.rating_min || value > rules.rating_max {
        return Err(FieldError::RatingOutOfRange);
    }

    Ok(value)
}

pub fn validate_ratings(raw: [&str; 3]) -> [Result<f64, FieldError>; 3] {
    validate_ratings_with(raw, &FormRules::default())
}

/// Validate the three ratings independently.
///
/// Each entry carries its own verdict so every offending field gets its message;
/// the group passes only when all three are `Ok`.
///
/// ```rust
/// use lib_form::validate_ratings;
///
/// let [r1, r2, r3] = validate_ratings(["0", "5", "11"]);
/// assert!(r1.is_err());
/// assert_eq!(r2, Ok(5.0));
/// assert!(r3.is_err());
/// ```
pub fn validate_ratings_with(raw: [&str; 3], rules: &FormRules) -> [Result<f64, FieldError>; 3] {
    raw.map(|value| validate_rating_with(value, rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_letters_and_whitespace() {
        for value in ["Jonas", "  Jonas  ", "Ona Marija", "a\tb"] {
            assert!(validate_name(value).is_ok(), "rejected {:?}", value);
            assert!(validate_surname(value).is_ok(), "rejected {:?}", value);
        }
        for value in ["", " ", "\t\n"] {
            assert_eq!(validate_name(value), Err(FieldError::NameRequired));
            assert_eq!(validate_surname(value), Err(FieldError::SurnameRequired));
        }
    }

    #[test]
    fn test_name_rejects_digits_and_symbols() {
        for value in ["Jonas1", "O'Brien", "Anne-Marie", "Žemaitis", "x@y", "Bob!"] {
            assert_eq!(validate_name(value), Err(FieldError::OnlyLetters), "accepted {:?}", value);
            assert_eq!(validate_surname(value), Err(FieldError::OnlyLetters));
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("user@mail.example.lt").is_ok());
        assert_eq!(validate_email("a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a b@c.de"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@@b.co"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("@b.co"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email(" a@b.co"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("   "), Err(FieldError::EmailRequired));
    }

    #[test]
    fn test_address_length() {
        assert_eq!(validate_address("abcd"), Err(FieldError::AddressTooShort));
        assert!(validate_address("abcde").is_ok());
        assert_eq!(validate_address("  abcd  "), Err(FieldError::AddressTooShort));
        assert!(validate_address("Šiūlų").is_ok());
    }

    #[test]
    fn test_address_custom_minimum() {
        let rules = FormRules { address_min_len: 10, ..FormRules::default() };
        assert_eq!(validate_address_with("Vilnius 1", &rules), Err(FieldError::AddressTooShort));
        assert!(validate_address_with("Gedimino 9, Vilnius", &rules).is_ok());
    }

    #[test]
    fn test_ratings_in_range() {
        let [r1, r2, r3] = validate_ratings(["5", "8", "10"]);
        assert_eq!(r1, Ok(5.0));
        assert_eq!(r2, Ok(8.0));
        assert_eq!(r3, Ok(10.0));
        assert_eq!(validate_rating("1"), Ok(1.0));
        assert_eq!(validate_rating(" 7.5 "), Ok(7.5));
    }

    #[test]
    fn test_ratings_out_of_range() {
        for raw in ["", "0", "0.0", "-3", "0.5", "10.01", "11", "abc", "NaN", "inf", "5,5"] {
            assert_eq!(validate_rating(raw), Err(FieldError::RatingOutOfRange), "accepted {:?}", raw);
        }
    }
}
