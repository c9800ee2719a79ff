//! # Bookmark Store
//!
//! Data access for the `bookmarks` table. Each operation is a single
//! statement; there are no retries and no multi-statement transactions.

pub mod connection;
pub mod memory;
pub mod schema;
pub mod sqlite;

use thiserror::Error;

use crate::bookmark::{Bookmark, BookmarkChanges, NewBookmark};

pub use connection::{create_pool, run_migrations, DbPool};
pub use memory::InMemoryBookmarkStore;
pub use sqlite::SqliteBookmarkStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data access failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not obtain a connection from the pool
    #[error("database connection failed: {0}")]
    Connection(#[from] diesel::r2d2::PoolError),

    /// Statement failed
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    /// Pending migrations could not be applied
    #[error("database migration failed: {0}")]
    Migration(String),

    /// Blocking store task panicked or was cancelled
    #[error("store task failed: {0}")]
    Task(String),

    /// In-memory store lock poisoned
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Short machine-readable kind, used in logs and debug responses
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Connection(_) => "connection",
            StoreError::Query(_) => "query",
            StoreError::Migration(_) => "migration",
            StoreError::Task(_) => "task",
            StoreError::Poisoned => "poisoned",
        }
    }
}

/// Store trait for bookmark persistence.
///
/// Calls block; async callers run them on the blocking pool.
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks in insertion (id) order
    fn get_all(&self) -> StoreResult<Vec<Bookmark>>;

    /// A single bookmark, or `None` if the id is unknown
    fn get_by_id(&self, id: i32) -> StoreResult<Option<Bookmark>>;

    /// Persist a bookmark and return it with its assigned id
    fn insert(&self, bookmark: &NewBookmark) -> StoreResult<Bookmark>;

    /// Write the supplied fields. Returns the number of rows affected (0 or 1).
    fn update(&self, id: i32, changes: &BookmarkChanges) -> StoreResult<usize>;

    /// Remove a bookmark. Returns the number of rows affected (0 or 1).
    fn delete(&self, id: i32) -> StoreResult<usize>;
}
