//! Contest request DTOs

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    constants::{MAX_CONTEST_YEAR, MIN_CONTEST_YEAR},
    models::{ClassLevel, ContestChanges, NewContest, RawClassLevel, Solution},
    utils::{
        Patch,
        validation::{normalize_class_level, validate_contest_name, validate_year},
    },
};

/// Create contest request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContestRequest {
    /// 9, 10, 11, 12 (number or string) or "other"; checked in `TryFrom`
    pub class_level: RawClassLevel,

    #[validate(range(
        min = MIN_CONTEST_YEAR,
        max = MAX_CONTEST_YEAR,
        message = "year must be between 2000 and 2100"
    ))]
    pub year: i32,

    #[validate(length(min = 1, message = "contest_name must not be empty"))]
    pub contest_name: String,

    pub contest_url: String,

    #[serde(default)]
    pub solutions: Vec<Solution>,
}

impl TryFrom<CreateContestRequest> for NewContest {
    type Error = ValidationErrors;

    fn try_from(payload: CreateContestRequest) -> Result<Self, Self::Error> {
        let mut errors = payload.validate().err().unwrap_or_else(ValidationErrors::new);
        let class_level = normalize_into(&mut errors, &payload.class_level);

        match class_level {
            Some(class_level) if errors.is_empty() => Ok(Self {
                class_level,
                year: payload.year,
                contest_name: payload.contest_name,
                contest_url: payload.contest_url,
                solutions: payload.solutions,
            }),
            _ => Err(errors),
        }
    }
}

/// Update contest request
///
/// Omitted keys leave the stored value untouched. Explicit `null` is rejected
/// because no contest field is nullable; an explicit `[]` for `solutions`
/// clears them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContestRequest {
    #[serde(default)]
    pub class_level: Patch<RawClassLevel>,

    #[serde(default)]
    pub year: Patch<i32>,

    #[serde(default)]
    pub contest_name: Patch<String>,

    #[serde(default)]
    pub contest_url: Patch<String>,

    #[serde(default)]
    pub solutions: Patch<Vec<Solution>>,
}

impl TryFrom<UpdateContestRequest> for ContestChanges {
    type Error = ValidationErrors;

    fn try_from(payload: UpdateContestRequest) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        reject_null(&mut errors, "class_level", &payload.class_level);
        reject_null(&mut errors, "year", &payload.year);
        reject_null(&mut errors, "contest_name", &payload.contest_name);
        reject_null(&mut errors, "contest_url", &payload.contest_url);
        reject_null(&mut errors, "solutions", &payload.solutions);

        let class_level = payload
            .class_level
            .as_value()
            .and_then(|raw| normalize_into(&mut errors, raw));
        if let Some(Err(e)) = payload.year.as_value().map(|year| validate_year(*year)) {
            errors.add("year", e);
        }
        if let Some(Err(e)) = payload.contest_name.as_value().map(|name| validate_contest_name(name)) {
            errors.add("contest_name", e);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            class_level,
            year: into_option(payload.year),
            contest_name: into_option(payload.contest_name),
            contest_url: into_option(payload.contest_url),
            solutions: into_option(payload.solutions),
        })
    }
}

/// Normalize once, recording a failure under `class_level`
fn normalize_into(errors: &mut ValidationErrors, raw: &RawClassLevel) -> Option<ClassLevel> {
    normalize_class_level(raw)
        .map_err(|e| errors.add("class_level", e))
        .ok()
}

fn reject_null<T>(errors: &mut ValidationErrors, field: &'static str, value: &Patch<T>) {
    if matches!(value, Patch::Null) {
        let mut error = ValidationError::new("null");
        error.message = Some(format!("{field} must not be null").into());
        errors.add(field, error);
    }
}

/// Only called after `Patch::Null` has been rejected
fn into_option<T>(value: Patch<T>) -> Option<T> {
    match value {
        Patch::Value(value) => Some(value),
        Patch::Missing | Patch::Null => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassLevel;

    fn create_request(body: serde_json::Value) -> CreateContestRequest {
        serde_json::from_value(body).unwrap()
    }

    fn update_request(body: serde_json::Value) -> UpdateContestRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_create_canonicalizes_numeric_class_level() {
        let payload = create_request(serde_json::json!({
            "class_level": 10,
            "year": 2023,
            "contest_name": "X",
            "contest_url": "http://x"
        }));

        let contest = NewContest::try_from(payload).unwrap();
        assert_eq!(contest.class_level, ClassLevel::Ten);
        assert!(contest.solutions.is_empty());
    }

    #[test]
    fn test_create_year_bounds() {
        for (year, ok) in [(1999, false), (2000, true), (2100, true), (2101, false)] {
            let payload = create_request(serde_json::json!({
                "class_level": "other",
                "year": year,
                "contest_name": "X",
                "contest_url": "http://x"
            }));
            assert_eq!(NewContest::try_from(payload).is_ok(), ok, "year {year}");
        }
    }

    #[test]
    fn test_create_rejects_unknown_class_level() {
        let payload = create_request(serde_json::json!({
            "class_level": "nine",
            "year": 2023,
            "contest_name": "X",
            "contest_url": "http://x"
        }));

        let errors = NewContest::try_from(payload).unwrap_err();
        assert!(errors.field_errors().contains_key("class_level"));
    }

    #[test]
    fn test_create_reports_every_invalid_field() {
        let payload = create_request(serde_json::json!({
            "class_level": "13",
            "year": 1999,
            "contest_name": "X",
            "contest_url": "http://x"
        }));

        let errors = NewContest::try_from(payload).unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["class_level"].len(), 1);
        assert!(fields.contains_key("year"));
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let payload = create_request(serde_json::json!({
            "class_level": 9,
            "year": 2023,
            "contest_name": "",
            "contest_url": "http://x"
        }));

        assert!(NewContest::try_from(payload).is_err());
    }

    #[test]
    fn test_update_omitted_fields_are_unchanged() {
        let changes = ContestChanges::try_from(update_request(serde_json::json!({
            "year": 2024
        })))
        .unwrap();

        assert_eq!(
            changes,
            ContestChanges {
                year: Some(2024),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_empty_body_is_no_change() {
        let changes = ContestChanges::try_from(update_request(serde_json::json!({}))).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_update_explicit_empty_values_are_kept() {
        let changes = ContestChanges::try_from(update_request(serde_json::json!({
            "solutions": [],
            "contest_url": ""
        })))
        .unwrap();

        assert_eq!(changes.solutions, Some(Vec::new()));
        assert_eq!(changes.contest_url, Some(String::new()));
    }

    #[test]
    fn test_update_rejects_null_and_invalid_values() {
        let result = ContestChanges::try_from(update_request(serde_json::json!({
            "class_level": null,
            "year": 2101
        })));

        let errors = result.unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("class_level"));
        assert!(fields.contains_key("year"));
    }

    #[test]
    fn test_update_unknown_class_level_reported_once() {
        let errors = ContestChanges::try_from(update_request(serde_json::json!({
            "class_level": 13
        })))
        .unwrap_err();

        assert_eq!(errors.field_errors()["class_level"].len(), 1);
    }

    #[test]
    fn test_update_canonicalizes_digit_string() {
        let changes = ContestChanges::try_from(update_request(serde_json::json!({
            "class_level": "12"
        })))
        .unwrap();
        assert_eq!(changes.class_level, Some(ClassLevel::Twelve));
    }
}
