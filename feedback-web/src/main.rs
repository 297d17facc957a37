//! Feedback Form - Leptos Frontend
//!
//! Browser binding for `lib-form`: renders the form, runs a validation pass on
//! every input event and shows the summary after a successful submit.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Feedback form starting...");

    let rules = utils::rules::load_rules();

    utils::browser::hide_loading_screen();

    // Mount the Leptos app
    leptos::mount::mount_to_body(move || view! { <App rules=rules.clone()/> });
    log::debug!("Feedback form mounted");
}
