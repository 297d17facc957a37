//! Feedback Form App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use lib_form::FormRules;

use crate::pages::FeedbackPage;
use crate::state::form::provide_feedback_context;

#[component]
pub fn App(rules: FormRules) -> impl IntoView {
    provide_feedback_context(rules);

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=FeedbackPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Back to the form"</span>
            </A>
        </div>
    }
}
