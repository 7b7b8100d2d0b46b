//! Storage collaborator for the contest collection

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::{query::ContestQuery, repositories::ContestRepository},
    error::AppResult,
    models::{Contest, NewContest},
};

/// Persistence operations the contest service depends on.
///
/// Implementations must make each single-record write atomic and visible to
/// subsequent reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContestStore: Send + Sync {
    /// Run a filtered, ordered read
    async fn fetch(&self, query: &ContestQuery) -> AppResult<Vec<Contest>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Contest>>;

    /// Persist a new contest and return it with its assigned id
    async fn insert(&self, contest: &NewContest) -> AppResult<Contest>;

    /// Replace the stored contest with the same id; `None` if it no longer exists
    async fn update(&self, contest: &Contest) -> AppResult<Option<Contest>>;

    /// Returns whether a contest was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

#[async_trait]
impl ContestStore for PgPool {
    async fn fetch(&self, query: &ContestQuery) -> AppResult<Vec<Contest>> {
        ContestRepository::fetch(self, query).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Contest>> {
        ContestRepository::find_by_id(self, id).await
    }

    async fn insert(&self, contest: &NewContest) -> AppResult<Contest> {
        ContestRepository::create(self, contest).await
    }

    async fn update(&self, contest: &Contest) -> AppResult<Option<Contest>> {
        ContestRepository::update(self, contest).await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        ContestRepository::delete(self, id).await
    }
}
