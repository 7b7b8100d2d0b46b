//! Utility functions

pub mod patch;
pub mod validation;

pub use patch::Patch;
pub use validation::{normalize_class_level, validate_contest_name, validate_year};
