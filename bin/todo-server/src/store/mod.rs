//! Record store abstraction.
//!
//! [`TodoStore`] is the interface handlers use to read and mutate the task
//! list. Two implementations exist: [`memory::MemoryStore`] (process-local)
//! and [`sqlite::SqliteStore`] (a `todos` table via sqlx). The concrete type
//! is picked once in `main` and threaded through [`crate::state::AppState`].
//!
//! All trait methods use `impl Future` in their signatures so no extra
//! `async-trait` crate is required.

pub mod memory;
pub mod sqlite;

use std::future::Future;

use thiserror::Error;
use todo_types::{Todo, TodoId};
use tracing::info;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Failure inside a store backend. The memory store never produces one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Storage for the task list.
///
/// Implementations serialize mutations so ids are never handed out twice and
/// a toggle cannot lose a concurrent update.
pub trait TodoStore: Send + Sync + 'static {
    /// All tasks in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    /// Append a new, not completed task with a fresh id.
    ///
    /// Callers validate that `content` is non-empty.
    fn insert(&self, content: &str) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    /// Look up one task. Toggle and delete report hits themselves, so only
    /// tests and tooling call this.
    #[allow(dead_code)]
    fn find_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    /// Flip `completed` and return the updated task, or `None` if no task has
    /// this id.
    fn toggle_completed(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, StoreError>> + Send;

    /// Remove the task with this id. Returns whether a task was removed; an
    /// unknown id is not an error.
    fn delete_by_id(&self, id: TodoId) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// Fill an empty store with the two demo tasks.
///
/// A store that already holds tasks is left alone.
pub async fn seed_demo<S: TodoStore>(store: &S) -> Result<(), StoreError> {
    if !store.list().await?.is_empty() {
        return Ok(());
    }
    let first = store.insert("learn the BETH stack").await?;
    store.toggle_completed(first.id).await?;
    store.insert("learn vim").await?;
    info!("seeded demo tasks");
    Ok(())
}
