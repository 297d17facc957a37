//! Application constants

/// Element holding the summary of the last submission
pub const RESULTS_ID: &str = "formResults";

/// `<script type="application/json">` element with rule overrides
pub const RULES_ELEMENT_ID: &str = "form-rules";

pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

pub const SUBMIT_NOTICE: &str = "Form submitted successfully!";
