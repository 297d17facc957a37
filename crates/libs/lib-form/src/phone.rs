//! # Lithuanian Phone Numbers
//!
//! The phone input is a live mask: on every keystroke the typed value is reduced
//! to national digits and rewritten as `+370 XXX XXXXX`. The work is split into
//! three pure steps which [`validate_phone`] composes:
//!
//! 1. [`normalize_phone`] - keep digits, drop a leading country code, truncate
//! 2. [`format_phone`] - build the display mask from those digits
//! 3. [`is_valid_phone`] - judge whether the number is complete
//!
//! ```rust
//! use lib_form::validate_phone;
//!
//! let check = validate_phone("370600123 45");
//! assert_eq!(check.display.as_deref(), Some("+370 600 12345"));
//! assert!(check.result.is_ok());
//! ```

use crate::error::FieldError;
use crate::rules::FormRules;

/// Digits shown before the space in the mask.
const GROUP_LEN: usize = 3;

/// Outcome of one phone validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneCheck {
    /// Value to write back into the input, `None` when no digits remain
    pub display: Option<String>,
    pub result: Result<(), FieldError>,
}

pub fn normalize_phone(raw: &str) -> String {
    normalize_phone_with(raw, &FormRules::default())
}

/// Reduce raw input to at most `rules.phone_digits` national digits.
///
/// The country code is stripped once, only when it leads the digit string.
pub fn normalize_phone_with(raw: &str, rules: &FormRules) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let national = digits
        .strip_prefix(rules.phone_country_code.as_str())
        .unwrap_or(&digits);

    // ASCII digits only, so byte length equals char count
    national[..national.len().min(rules.phone_digits)].to_string()
}

pub fn is_valid_phone(digits: &str) -> bool {
    is_valid_phone_with(digits, &FormRules::default())
}

pub fn is_valid_phone_with(digits: &str, rules: &FormRules) -> bool {
    digits.len() == rules.phone_digits && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn format_phone(digits: &str) -> Option<String> {
    format_phone_with(digits, &FormRules::default())
}

/// Build the display mask, e.g. `"60012345"` -> `"+370 600 12345"`.
///
/// Fewer than four digits are shown without the inner space.
pub fn format_phone_with(digits: &str, rules: &FormRules) -> Option<String> {
    if digits.is_empty() {
        return None;
    }

    let head: String = digits.chars().take(GROUP_LEN).collect();
    let rest: String = digits.chars().skip(GROUP_LEN).collect();
    let national = if rest.is_empty() {
        head
    } else {
        format!("{} {}", head, rest)
    };

    Some(format!("+{} {}", rules.phone_country_code, national))
}

pub fn validate_phone(raw: &str) -> PhoneCheck {
    validate_phone_with(raw, &FormRules::default())
}

pub fn validate_phone_with(raw: &str, rules: &FormRules) -> PhoneCheck {
    let digits = normalize_phone_with(raw, rules);
    let result = if is_valid_phone_with(&digits, rules) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    };

    PhoneCheck {
        display: format_phone_with(&digits, rules),
        result,
    }
}
