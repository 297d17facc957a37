//! Thin wrappers over the window/document APIs used by the app

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::constants::LOADING_ELEMENT_ID;

/// Hide the loading screen element
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, loading screen left in place");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
}

/// Text content of the element with the given id, if present.
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}

/// Show a blocking confirmation notice to the user.
pub fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available for notice: {}", message);
        return;
    };

    if let Err(e) = window.alert_with_message(message) {
        log::warn!("Failed to show notice: {:?}", e);
    }
}
