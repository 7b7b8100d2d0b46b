//! Contest service

use crate::{
    constants::class_levels,
    db::{ContestQuery, ContestStore},
    error::{AppError, AppResult},
    handlers::contests::request::{CreateContestRequest, UpdateContestRequest},
    models::{Contest, ContestChanges, NewContest, RawClassLevel},
    utils::validation::normalize_class_level,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List every contest, newest first
    pub async fn list_contests(store: &dyn ContestStore) -> AppResult<Vec<Contest>> {
        store.fetch(&ContestQuery::all()).await
    }

    /// Get contest by ID
    pub async fn get_contest(store: &dyn ContestStore, id: i64) -> AppResult<Contest> {
        store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::contest_not_found(id))
    }

    /// Create a new contest
    pub async fn create_contest(
        store: &dyn ContestStore,
        payload: CreateContestRequest,
    ) -> AppResult<Contest> {
        let new_contest = NewContest::try_from(payload)?;
        let contest = store.insert(&new_contest).await?;

        tracing::info!(
            contest_id = contest.id,
            class_level = %contest.class_level,
            year = contest.year,
            "Contest created"
        );

        Ok(contest)
    }

    /// Update contest
    ///
    /// The payload is fully validated before the existing record is loaded.
    pub async fn update_contest(
        store: &dyn ContestStore,
        id: i64,
        payload: UpdateContestRequest,
    ) -> AppResult<Contest> {
        let changes = ContestChanges::try_from(payload)?;

        let mut contest = Self::get_contest(store, id).await?;
        if changes.is_empty() {
            return Ok(contest);
        }

        contest.apply(changes);
        let updated = store
            .update(&contest)
            .await?
            .ok_or_else(|| AppError::contest_not_found(id))?;

        tracing::info!(contest_id = id, "Contest updated");

        Ok(updated)
    }

    /// Delete contest
    pub async fn delete_contest(store: &dyn ContestStore, id: i64) -> AppResult<()> {
        if !store.delete(id).await? {
            return Err(AppError::contest_not_found(id));
        }

        tracing::info!(contest_id = id, "Contest deleted");

        Ok(())
    }

    /// List contests of one class level, newest first
    pub async fn list_by_class_level(
        store: &dyn ContestStore,
        class_level: &str,
    ) -> AppResult<Vec<Contest>> {
        let level = normalize_class_level(&RawClassLevel::Text(class_level.to_string()))
            .map_err(|_| {
                AppError::InvalidInput(format!(
                    "Class level must be one of {:?}",
                    class_levels::ALL
                ))
            })?;

        store.fetch(&ContestQuery::by_class_level(level)).await
    }

    /// List contests of one year, grouped by class level
    pub async fn list_by_year(store: &dyn ContestStore, year: i32) -> AppResult<Vec<Contest>> {
        store.fetch(&ContestQuery::by_year(year)).await
    }
}
