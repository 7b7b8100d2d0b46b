//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod class_level;
pub mod contest;

pub use class_level::*;
pub use contest::*;
