//! Browser helpers and configuration

pub mod browser;
pub mod constants;
pub mod rules;
