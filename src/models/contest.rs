//! Contest model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

use crate::{
    error::AppError,
    models::ClassLevel,
    utils::validation::validate_year,
};

/// A link to the solution of one contest problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub problem_name: String,
    pub solution_url: String,
}

/// Persisted contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub class_level: ClassLevel,
    pub year: i32,
    pub contest_name: String,
    pub contest_url: String,
    pub solutions: Vec<Solution>,
}

impl Contest {
    /// Overwrite exactly the fields present in `changes`
    pub fn apply(&mut self, changes: ContestChanges) {
        if let Some(class_level) = changes.class_level {
            self.class_level = class_level;
        }
        if let Some(year) = changes.year {
            self.year = year;
        }
        if let Some(contest_name) = changes.contest_name {
            self.contest_name = contest_name;
        }
        if let Some(contest_url) = changes.contest_url {
            self.contest_url = contest_url;
        }
        if let Some(solutions) = changes.solutions {
            self.solutions = solutions;
        }
    }
}

/// Validated contest that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContest {
    pub class_level: ClassLevel,
    pub year: i32,
    pub contest_name: String,
    pub contest_url: String,
    pub solutions: Vec<Solution>,
}

impl NewContest {
    /// Attach the id assigned by storage
    pub fn with_id(self, id: i64) -> Contest {
        Contest {
            id,
            class_level: self.class_level,
            year: self.year,
            contest_name: self.contest_name,
            contest_url: self.contest_url,
            solutions: self.solutions,
        }
    }
}

/// Validated partial update; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContestChanges {
    pub class_level: Option<ClassLevel>,
    pub year: Option<i32>,
    pub contest_name: Option<String>,
    pub contest_url: Option<String>,
    pub solutions: Option<Vec<Solution>>,
}

impl ContestChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw `contests` row
#[derive(Debug, FromRow)]
pub struct ContestRow {
    pub id: i64,
    pub class_level: String,
    pub year: i32,
    pub contest_name: String,
    pub contest_url: String,
    pub solutions: Json<Vec<Solution>>,
}

/// Stored rows are re-validated so a bad row never reaches a client.
impl TryFrom<ContestRow> for Contest {
    type Error = AppError;

    fn try_from(row: ContestRow) -> Result<Self, Self::Error> {
        let class_level = row.class_level.parse::<ClassLevel>().map_err(|e| {
            AppError::Database(format!("contest {} has invalid class_level: {e}", row.id))
        })?;
        validate_year(row.year).map_err(|_| {
            AppError::Database(format!("contest {} has out-of-range year {}", row.id, row.year))
        })?;

        Ok(Self {
            id: row.id,
            class_level,
            year: row.year,
            contest_name: row.contest_name,
            contest_url: row.contest_url,
            solutions: row.solutions.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contest() -> Contest {
        Contest {
            id: 1,
            class_level: ClassLevel::Ten,
            year: 2022,
            contest_name: "Regional Olympiad".to_string(),
            contest_url: "https://example.org/regional".to_string(),
            solutions: vec![Solution {
                problem_name: "A".to_string(),
                solution_url: "https://example.org/a".to_string(),
            }],
        }
    }

    fn sample_row(class_level: &str, year: i32) -> ContestRow {
        ContestRow {
            id: 3,
            class_level: class_level.to_string(),
            year,
            contest_name: "Row".to_string(),
            contest_url: "http://row".to_string(),
            solutions: Json(Vec::new()),
        }
    }

    #[test]
    fn test_apply_only_year_leaves_rest_untouched() {
        let mut contest = sample_contest();
        let before = contest.clone();

        contest.apply(ContestChanges {
            year: Some(2024),
            ..Default::default()
        });

        assert_eq!(contest.year, 2024);
        assert_eq!(contest.class_level, before.class_level);
        assert_eq!(contest.contest_name, before.contest_name);
        assert_eq!(contest.contest_url, before.contest_url);
        assert_eq!(contest.solutions, before.solutions);
    }

    #[test]
    fn test_apply_explicit_empty_solutions_clears() {
        let mut contest = sample_contest();
        contest.apply(ContestChanges {
            solutions: Some(Vec::new()),
            ..Default::default()
        });
        assert!(contest.solutions.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample_contest()).unwrap();
        assert_eq!(value["class_level"], "10");
        assert_eq!(value["solutions"][0]["problem_name"], "A");
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_solution_ignores_unknown_keys() {
        let solution: Solution = serde_json::from_str(
            r#"{"problem_name": "B", "solution_url": "http://b", "author": "x"}"#,
        )
        .unwrap();
        assert_eq!(solution.problem_name, "B");
    }

    #[test]
    fn test_row_conversion_validates_stored_record() {
        let contest = Contest::try_from(sample_row("other", 2010)).unwrap();
        assert_eq!(contest.class_level, ClassLevel::Other);

        assert!(Contest::try_from(sample_row("13", 2010)).is_err());
        assert!(Contest::try_from(sample_row("9", 1999)).is_err());
    }
}
