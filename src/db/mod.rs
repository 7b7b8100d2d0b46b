//! Database module
//!
//! This module handles database connections, migrations, the storage
//! collaborator trait and its implementations.

pub mod connection;
pub mod memory;
pub mod query;
pub mod repositories;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use memory::MemoryContestStore;
pub use query::{ContestFilter, ContestOrder, ContestQuery};
pub use store::ContestStore;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
