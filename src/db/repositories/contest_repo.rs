//! Contest repository

use sqlx::{PgPool, Postgres, QueryBuilder, types::Json};

use crate::{
    db::query::ContestQuery,
    error::AppResult,
    models::{Contest, ContestRow, NewContest},
};

const CONTEST_COLUMNS: &str = "id, class_level, year, contest_name, contest_url, solutions";

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a new contest
    pub async fn create(pool: &PgPool, contest: &NewContest) -> AppResult<Contest> {
        let row = sqlx::query_as::<_, ContestRow>(&format!(
            r#"
            INSERT INTO contests (class_level, year, contest_name, contest_url, solutions)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CONTEST_COLUMNS}
            "#
        ))
        .bind(contest.class_level.as_str())
        .bind(contest.year)
        .bind(&contest.contest_name)
        .bind(&contest.contest_url)
        .bind(Json(&contest.solutions))
        .fetch_one(pool)
        .await?;

        row.try_into()
    }

    /// Find contest by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Contest>> {
        let row = sqlx::query_as::<_, ContestRow>(&format!(
            "SELECT {CONTEST_COLUMNS} FROM contests WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.map(Contest::try_from).transpose()
    }

    /// Run a filtered, ordered read
    pub async fn fetch(pool: &PgPool, query: &ContestQuery) -> AppResult<Vec<Contest>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {CONTEST_COLUMNS} FROM contests"));
        query.push_sql(&mut builder);

        let rows = builder
            .build_query_as::<ContestRow>()
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(Contest::try_from).collect()
    }

    /// Overwrite every mutable column of an existing contest
    pub async fn update(pool: &PgPool, contest: &Contest) -> AppResult<Option<Contest>> {
        let row = sqlx::query_as::<_, ContestRow>(&format!(
            r#"
            UPDATE contests
            SET
                class_level = $2,
                year = $3,
                contest_name = $4,
                contest_url = $5,
                solutions = $6
            WHERE id = $1
            RETURNING {CONTEST_COLUMNS}
            "#
        ))
        .bind(contest.id)
        .bind(contest.class_level.as_str())
        .bind(contest.year)
        .bind(&contest.contest_name)
        .bind(&contest.contest_url)
        .bind(Json(&contest.solutions))
        .fetch_optional(pool)
        .await?;

        row.map(Contest::try_from).transpose()
    }

    /// Delete contest
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM contests WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total contests
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
