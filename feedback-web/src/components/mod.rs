//! UI Components

pub mod field_input;
pub mod results;

pub use field_input::FieldInput;
pub use results::ResultsPanel;
