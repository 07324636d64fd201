//! SQLite implementation of [`TodoStore`].
//!
//! Uses [`sqlx`] with the `sqlite` feature. Migrations are run automatically
//! on startup via [`SqliteStore::connect`].
//!
//! # Migrations path
//!
//! `sqlx::migrate!("./migrations")` resolves the path **at compile time**
//! relative to `CARGO_MANIFEST_DIR` (the crate root), so the directory is
//! embedded into the binary. The database file location is determined at
//! runtime by the `TODO_DATABASE_URL` environment variable.
//!
//! # Queries
//!
//! The `sqlx::query` (runtime-verified) form is used so that no
//! `DATABASE_URL` environment variable is needed at compile time. Insert and
//! toggle are single `RETURNING` statements, so the read half of a toggle can
//! never interleave with another writer.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use todo_types::{Todo, TodoId};

use super::{StoreError, TodoStore};

type TodoRow = (i64, String, bool);

fn from_row((id, content, completed): TodoRow) -> Todo {
    Todo { id, content, completed }
}

/// SQLite-backed task store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g. `"sqlite://todos.db"`
    /// or `"sqlite::memory:"` for tests.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new();
        if url.contains(":memory:") {
            // Every connection to `:memory:` would otherwise see its own database.
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }
        let pool = pool_options.connect_with(options).await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

impl TodoStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, content, completed FROM todos ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn insert(&self, content: &str) -> Result<Todo, StoreError> {
        let row: TodoRow = sqlx::query_as(
            "INSERT INTO todos (content, completed) VALUES (?1, 0) \
             RETURNING id, content, completed",
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(from_row(row))
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, content, completed FROM todos WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(from_row))
    }

    async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let row: Option<TodoRow> = sqlx::query_as(
            "UPDATE todos SET completed = NOT completed WHERE id = ?1 \
             RETURNING id, content, completed",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(from_row))
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
