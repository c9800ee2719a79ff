//! Database connection management.
//!
//! Provides the r2d2 connection pool and embedded migrations for SQLite.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::{StoreError, StoreResult};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const DEFAULT_POOL_SIZE: u32 = 5;

/// Pragmas applied to every pooled connection.
#[derive(Debug, Clone, Copy)]
struct SqliteOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", self.busy_timeout_ms))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
pub fn create_pool(database_url: &str) -> StoreResult<DbPool> {
    create_pool_with_size(database_url, DEFAULT_POOL_SIZE)
}

/// Create a connection pool holding at most `max_size` connections.
pub fn create_pool_with_size(database_url: &str, max_size: u32) -> StoreResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqliteOptions {
            busy_timeout_ms: 5000,
        }))
        .build(manager)?;

    tracing::debug!(database_url, max_size, "connection pool created");
    Ok(pool)
}

/// Run all pending database migrations.
pub fn run_migrations(pool: &DbPool) -> StoreResult<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    for version in &applied {
        tracing::info!(%version, "applied migration");
    }
    Ok(())
}
