//! Submission summary block

use leptos::prelude::*;
use lib_form::Submission;

use crate::state::form::use_feedback_context;
use crate::utils::constants::RESULTS_ID;

/// Inline style of the average rating, coloured by tier.
pub fn average_style(submission: &Submission) -> String {
    format!("color:{}; font-weight:bold;", submission.tier.color())
}

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let ctx = use_feedback_context();
    let display = move || {
        if ctx.submission.with(Option::is_some) {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div id=RESULTS_ID class="form-results" style:display=display>
            {move || ctx.submission.get().map(|submission| {
                let style = average_style(&submission);
                let average = submission.average_display();
                let ratings = submission.ratings_display();
                view! {
                    <p><strong>"Name: "</strong>{submission.full_name}</p>
                    <p><strong>"Email: "</strong>{submission.email}</p>
                    <p><strong>"Phone: "</strong>{submission.phone}</p>
                    <p><strong>"Address: "</strong>{submission.address}</p>
                    <p><strong>"Ratings: "</strong>{ratings}</p>
                    <p><strong>"Average Rating: "</strong><span style=style>{average}</span></p>
                    <hr/>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_form::RatingTier;

    #[test]
    fn test_average_style_uses_tier_color() {
        let submission = Submission {
            full_name: "Ona Petraitis".to_string(),
            email: "ona@example.lt".to_string(),
            phone: "+370 600 12345".to_string(),
            address: "Gedimino pr. 9".to_string(),
            ratings: ["3".to_string(), "5".to_string(), "9".to_string()],
            average: 5.7,
            tier: RatingTier::Orange,
        };
        assert_eq!(average_style(&submission), "color:orange; font-weight:bold;");
        assert_eq!(submission.average_display(), "5.7");
    }
}
