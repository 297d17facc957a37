//! Page modules

pub mod feedback;

pub use feedback::FeedbackPage;
