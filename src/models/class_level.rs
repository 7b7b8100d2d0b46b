//! Class level model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::class_levels;

/// Canonical class level of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLevel {
    Nine,
    Ten,
    Eleven,
    Twelve,
    Other,
}

impl ClassLevel {
    /// Canonical string form, as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nine => class_levels::NINE,
            Self::Ten => class_levels::TEN,
            Self::Eleven => class_levels::ELEVEN,
            Self::Twelve => class_levels::TWELVE,
            Self::Other => class_levels::OTHER,
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a value outside the allowed class levels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("class_level must be one of {:?}", class_levels::ALL)]
pub struct UnknownClassLevel(pub String);

/// Strict parse: only the canonical strings are accepted.
impl FromStr for ClassLevel {
    type Err = UnknownClassLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            class_levels::NINE => Ok(Self::Nine),
            class_levels::TEN => Ok(Self::Ten),
            class_levels::ELEVEN => Ok(Self::Eleven),
            class_levels::TWELVE => Ok(Self::Twelve),
            class_levels::OTHER => Ok(Self::Other),
            _ => Err(UnknownClassLevel(s.to_string())),
        }
    }
}

impl Serialize for ClassLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClassLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Class level exactly as a client sent it: a JSON number or a string.
///
/// Use [`crate::utils::validation::normalize_class_level`] to turn it into a
/// [`ClassLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawClassLevel {
    Number(i64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse_accepts_canonical_forms() {
        for canonical in class_levels::ALL {
            let level: ClassLevel = canonical.parse().unwrap();
            assert_eq!(level.as_str(), *canonical);
        }
    }

    #[test]
    fn test_strict_parse_rejects_everything_else() {
        assert!("09".parse::<ClassLevel>().is_err());
        assert!("Other".parse::<ClassLevel>().is_err());
        assert!(" 10".parse::<ClassLevel>().is_err());
    }

    #[test]
    fn test_error_names_allowed_set() {
        let err = "13".parse::<ClassLevel>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"class_level must be one of ["9", "10", "11", "12", "other"]"#
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&ClassLevel::Ten).unwrap();
        assert_eq!(json, r#""10""#);
    }

    #[test]
    fn test_raw_class_level_accepts_numbers_and_strings() {
        let number: RawClassLevel = serde_json::from_str("10").unwrap();
        assert_eq!(number, RawClassLevel::Number(10));

        let text: RawClassLevel = serde_json::from_str(r#""other""#).unwrap();
        assert_eq!(text, RawClassLevel::Text("other".to_string()));

        assert!(serde_json::from_str::<RawClassLevel>("true").is_err());
    }

    #[test]
    fn test_raw_class_level_serializes_as_sent() {
        assert_eq!(serde_json::to_value(RawClassLevel::Number(9)).unwrap(), serde_json::json!(9));
        assert_eq!(
            serde_json::to_value(RawClassLevel::Text("other".to_string())).unwrap(),
            serde_json::json!("other")
        );
    }
}
