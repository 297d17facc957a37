//! # Form Rules
//!
//! Constants of the rule set. [`FormRules::default()`] is the production rule
//! set; a page may override individual values with a JSON object, which is
//! merged over the defaults and checked with [`FormRules::validate`].
//!
//! ```rust
//! use lib_form::FormRules;
//!
//! let rules = FormRules::from_json(r#"{ "address_min_len": 8 }"#).unwrap();
//! assert_eq!(rules.address_min_len, 8);
//! assert_eq!(rules.phone_digits, 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    /// Country calling code shown in the mask and stripped from typed input
    pub phone_country_code: String,

    /// Number of national digits in a complete phone number
    pub phone_digits: usize,

    /// Minimum address length in characters, after trimming
    pub address_min_len: usize,

    /// Lowest accepted rating (inclusive, must be above zero)
    pub rating_min: f64,

    /// Highest accepted rating (inclusive)
    pub rating_max: f64,

    /// Averages at or above this are `orange`
    pub tier_orange_from: f64,

    /// Averages at or above this are `green`
    pub tier_green_from: f64,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            phone_country_code: "370".to_string(),
            phone_digits: 8,
            address_min_len: 5,
            rating_min: 1.0,
            rating_max: 10.0,
            tier_orange_from: 4.0,
            tier_green_from: 7.0,
        }
    }
}

impl FormRules {
    /// Parse a (possibly partial) JSON object over the defaults and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: FormRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        if self.phone_country_code.is_empty()
            || !self.phone_country_code.chars().all(|c| c.is_ascii_digit())
        {
            return Err(RulesError::Invalid(
                "phone_country_code must be a non-empty string of digits".to_string(),
            ));
        }

        if self.phone_digits == 0 {
            return Err(RulesError::Invalid("phone_digits must be at least 1".to_string()));
        }

        // Zero is the value of an empty rating input, so it can never be accepted.
        if self.rating_min.is_nan()
            || self.rating_min <= 0.0
            || !self.rating_max.is_finite()
            || self.rating_min > self.rating_max
        {
            return Err(RulesError::Invalid(format!(
                "rating range {}..={} must be finite, positive and non-empty",
                self.rating_min, self.rating_max
            )));
        }

        if !self.tier_orange_from.is_finite() || !self.tier_green_from.is_finite() {
            return Err(RulesError::Invalid(format!(
                "tier thresholds must be finite, got {} and {}",
                self.tier_orange_from, self.tier_green_from
            )));
        }

        if self.tier_orange_from > self.tier_green_from {
            return Err(RulesError::Invalid(format!(
                "tier_orange_from ({}) must not exceed tier_green_from ({})",
                self.tier_orange_from, self.tier_green_from
            )));
        }

        Ok(())
    }
}
