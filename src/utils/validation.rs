//! Input validation utilities
//!
//! The same helpers back the create payload, the update payload and the
//! stored contest, so every shape enforces identical rules.

use std::borrow::Cow;

use validator::ValidationError;

use crate::{
    constants::{MAX_CONTEST_YEAR, MIN_CONTEST_YEAR},
    models::{ClassLevel, RawClassLevel},
};

/// Canonicalize a client-supplied class level.
///
/// Integers become their decimal string; strings (digit-only or not) are
/// checked as-is against the allowed set.
pub fn normalize_class_level(raw: &RawClassLevel) -> Result<ClassLevel, ValidationError> {
    let candidate: Cow<'_, str> = match raw {
        RawClassLevel::Number(n) => Cow::Owned(n.to_string()),
        RawClassLevel::Text(s) => Cow::Borrowed(s.as_str()),
    };

    candidate
        .parse::<ClassLevel>()
        .map_err(|e| error_with_message("class_level", e.to_string()))
}

/// Validate contest year range (inclusive)
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    if (MIN_CONTEST_YEAR..=MAX_CONTEST_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(error_with_message(
            "range",
            format!("year must be between {MIN_CONTEST_YEAR} and {MAX_CONTEST_YEAR}"),
        ))
    }
}

/// Validate that a contest name is not empty
pub fn validate_contest_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(error_with_message("length", "contest_name must not be empty"))
    } else {
        Ok(())
    }
}

fn error_with_message(
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
