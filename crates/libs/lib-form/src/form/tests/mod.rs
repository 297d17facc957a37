//! # Form Tests
//!
//! Whole-form validation passes and the submit flow.

mod check;

use super::*;

/// Input with every field valid and the given ratings.
pub fn valid_input(ratings: [&str; 3]) -> FormInput {
    FormInput {
        name: "Ona".to_string(),
        surname: "Petraitis".to_string(),
        email: "ona@example.lt".to_string(),
        address: "Gedimino pr. 9, Vilnius".to_string(),
        phone: "860012345".to_string(),
        rating1: ratings[0].to_string(),
        rating2: ratings[1].to_string(),
        rating3: ratings[2].to_string(),
    }
}
