//! In-memory contest store
//!
//! Used by `STORAGE_BACKEND=memory` and by the router tests. Contents are lost
//! when the process exits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    db::{query::ContestQuery, store::ContestStore},
    error::AppResult,
    models::{Contest, NewContest},
};

#[derive(Debug, Default)]
pub struct MemoryContestStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    contests: BTreeMap<i64, Contest>,
}

impl MemoryContestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContestStore for MemoryContestStore {
    async fn fetch(&self, query: &ContestQuery) -> AppResult<Vec<Contest>> {
        let inner = self.inner.read().await;
        let mut contests: Vec<Contest> = inner
            .contests
            .values()
            .filter(|contest| query.matches(contest))
            .cloned()
            .collect();
        contests.sort_by(|a, b| query.compare(a, b));

        Ok(contests)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Contest>> {
        Ok(self.inner.read().await.contests.get(&id).cloned())
    }

    async fn insert(&self, contest: &NewContest) -> AppResult<Contest> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let stored = contest.clone().with_id(inner.last_id);
        inner.contests.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, contest: &Contest) -> AppResult<Option<Contest>> {
        let mut inner = self.inner.write().await;

        Ok(inner.contests.get_mut(&contest.id).map(|slot| {
            *slot = contest.clone();
            slot.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.inner.write().await.contests.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassLevel;

    fn new_contest(name: &str, year: i32) -> NewContest {
        NewContest {
            class_level: ClassLevel::Eleven,
            year,
            contest_name: name.to_string(),
            contest_url: "http://example".to_string(),
            solutions: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_never_reused() {
        let store = MemoryContestStore::new();
        let first = store.insert(&new_contest("A", 2020)).await.unwrap();
        let second = store.insert(&new_contest("B", 2020)).await.unwrap();
        assert_ne!(first.id, second.id);

        assert!(store.delete(second.id).await.unwrap());
        let third = store.insert(&new_contest("C", 2020)).await.unwrap();
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryContestStore::new();
        let contest = new_contest("Ghost", 2020).with_id(99);
        assert!(store.update(&contest).await.unwrap().is_none());
        assert!(store.fetch(&ContestQuery::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = MemoryContestStore::new();
        let contest = store.insert(&new_contest("Once", 2020)).await.unwrap();

        assert!(store.delete(contest.id).await.unwrap());
        assert!(!store.delete(contest.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_fetch_applies_query() {
        let store = MemoryContestStore::new();
        for (name, year) in [("X", 2021), ("Y", 2023), ("Z", 2022)] {
            store.insert(&new_contest(name, year)).await.unwrap();
        }

        let years: Vec<i32> = store
            .fetch(&ContestQuery::all())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.year)
            .collect();
        assert_eq!(years, vec![2023, 2022, 2021]);

        let only_2022 = store.fetch(&ContestQuery::by_year(2022)).await.unwrap();
        assert_eq!(only_2022.len(), 1);
        assert_eq!(only_2022[0].contest_name, "Z");
    }
}
