//! Read queries over the contest collection
//!
//! A [`ContestQuery`] is a filter plus an ordering rule. Stores either render
//! it to SQL ([`ContestQuery::push_sql`]) or evaluate it in memory
//! ([`ContestQuery::matches`] / [`ContestQuery::compare`]); both must agree.

use std::cmp::Ordering;

use sqlx::{Postgres, QueryBuilder};

use crate::models::{ClassLevel, Contest};

/// Which contests a query selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestFilter {
    All,
    ClassLevel(ClassLevel),
    Year(i32),
}

/// How results are ordered. Ties always fall back to ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestOrder {
    /// `year` descending, then `contest_name` ascending
    NewestFirst,
    /// `class_level` ascending (string order), then `contest_name` ascending
    ByClassLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestQuery {
    pub filter: ContestFilter,
    pub order: ContestOrder,
}

impl ContestQuery {
    /// Every contest, newest first
    pub fn all() -> Self {
        Self {
            filter: ContestFilter::All,
            order: ContestOrder::NewestFirst,
        }
    }

    /// Contests of one class level, newest first
    pub fn by_class_level(class_level: ClassLevel) -> Self {
        Self {
            filter: ContestFilter::ClassLevel(class_level),
            order: ContestOrder::NewestFirst,
        }
    }

    /// Contests of one year, grouped by class level
    pub fn by_year(year: i32) -> Self {
        Self {
            filter: ContestFilter::Year(year),
            order: ContestOrder::ByClassLevel,
        }
    }

    pub fn matches(&self, contest: &Contest) -> bool {
        match self.filter {
            ContestFilter::All => true,
            ContestFilter::ClassLevel(level) => contest.class_level == level,
            ContestFilter::Year(year) => contest.year == year,
        }
    }

    /// Bytewise comparison, the same as `COLLATE "C"` in SQL
    pub fn compare(&self, a: &Contest, b: &Contest) -> Ordering {
        let primary = match self.order {
            ContestOrder::NewestFirst => b.year.cmp(&a.year),
            ContestOrder::ByClassLevel => a.class_level.as_str().cmp(b.class_level.as_str()),
        };

        primary
            .then_with(|| a.contest_name.cmp(&b.contest_name))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Append the `WHERE` and `ORDER BY` clauses to a `SELECT ... FROM contests`
    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self.filter {
            ContestFilter::All => {}
            ContestFilter::ClassLevel(level) => {
                builder.push(" WHERE class_level = ").push_bind(level.as_str());
            }
            ContestFilter::Year(year) => {
                builder.push(" WHERE year = ").push_bind(year);
            }
        }

        builder.push(match self.order {
            ContestOrder::NewestFirst => {
                r#" ORDER BY year DESC, contest_name COLLATE "C" ASC, id ASC"#
            }
            ContestOrder::ByClassLevel => {
                r#" ORDER BY class_level COLLATE "C" ASC, contest_name COLLATE "C" ASC, id ASC"#
            }
        });
    }
}
