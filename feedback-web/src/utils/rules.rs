//! Loading validation rule overrides from the host page

use lib_form::FormRules;

use crate::utils::browser::element_text;
use crate::utils::constants::RULES_ELEMENT_ID;

/// Read the rules block from the page, falling back to the defaults.
pub fn load_rules() -> FormRules {
    parse_rules(element_text(RULES_ELEMENT_ID).as_deref())
}

/// Rules from an optional JSON text; a missing, blank or rejected block yields
/// the defaults.
pub fn parse_rules(json: Option<&str>) -> FormRules {
    let Some(json) = json.map(str::trim).filter(|text| !text.is_empty()) else {
        return FormRules::default();
    };

    match FormRules::from_json(json) {
        Ok(rules) => {
            log::info!("Loaded form rules from #{}", RULES_ELEMENT_ID);
            rules
        }
        Err(e) => {
            log::warn!("{}; using default rules", e);
            FormRules::default()
        }
    }
}
