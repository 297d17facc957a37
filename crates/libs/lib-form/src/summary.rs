//! # Submission Summary
//!
//! What the results block shows after a successful submit: the contact details
//! as entered, the three raw ratings and their average with a tier colour.

use crate::rules::FormRules;

/// Colour band of the average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Red,
    Orange,
    Green,
}

impl RatingTier {
    /// Classify an average; compare the numeric value, never its formatted text.
    pub fn for_average(average: f64, rules: &FormRules) -> Self {
        if average >= rules.tier_green_from {
            RatingTier::Green
        } else if average >= rules.tier_orange_from {
            RatingTier::Orange
        } else {
            RatingTier::Red
        }
    }

    /// CSS colour name.
    pub fn color(&self) -> &'static str {
        match self {
            RatingTier::Red => "red",
            RatingTier::Orange => "orange",
            RatingTier::Green => "green",
        }
    }
}

/// Mean of the three ratings, rounded to one decimal place.
///
/// ```rust
/// use lib_form::summary::average_rating;
///
/// assert_eq!(average_rating([3.0, 5.0, 9.0]), 5.7);
/// assert_eq!(average_rating([10.0, 10.0, 10.0]), 10.0);
/// ```
pub fn average_rating(ratings: [f64; 3]) -> f64 {
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// A successfully submitted form.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    /// Phone number as masked at submit time
    pub phone: String,
    pub address: String,
    /// Ratings exactly as typed
    pub ratings: [String; 3],
    pub average: f64,
    pub tier: RatingTier,
}

impl Submission {
    /// The average with one decimal, e.g. `"5.7"` or `"10.0"`.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }

    pub fn ratings_display(&self) -> String {
        self.ratings.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rounding() {
        assert_eq!(average_rating([1.0, 1.0, 2.0]), 1.3);
        assert_eq!(average_rating([1.0, 2.0, 2.0]), 1.7);
        assert_eq!(average_rating([7.5, 7.5, 7.5]), 7.5);
    }

    #[test]
    fn test_tier_boundaries() {
        let rules = FormRules::default();
        assert_eq!(RatingTier::for_average(1.0, &rules), RatingTier::Red);
        assert_eq!(RatingTier::for_average(3.9, &rules), RatingTier::Red);
        assert_eq!(RatingTier::for_average(4.0, &rules), RatingTier::Orange);
        assert_eq!(RatingTier::for_average(6.9, &rules), RatingTier::Orange);
        assert_eq!(RatingTier::for_average(7.0, &rules), RatingTier::Green);
        assert_eq!(RatingTier::for_average(10.0, &rules), RatingTier::Green);
    }

    #[test]
    fn test_tier_uses_rounded_average() {
        // 3.966.. rounds to 4.0 and is shown as such, so it is orange.
        let average = average_rating([3.9, 4.0, 4.0]);
        assert_eq!(average, 4.0);
        assert_eq!(RatingTier::for_average(average, &FormRules::default()), RatingTier::Orange);
    }

    #[test]
    fn test_display_helpers() {
        let submission = Submission {
            full_name: "Ona Petraitė".to_string(),
            email: "ona@example.lt".to_string(),
            phone: "+370 600 12345".to_string(),
            address: "Gedimino pr. 1".to_string(),
            ratings: ["10".to_string(), "10".to_string(), "10".to_string()],
            average: 10.0,
            tier: RatingTier::Green,
        };
        assert_eq!(submission.average_display(), "10.0");
        assert_eq!(submission.ratings_display(), "10, 10, 10");
        assert_eq!(submission.tier.color(), "green");
    }
}
