//! Store handle - the single shared database connection
//!
//! Opened once at startup, passed explicitly through `AppState`, and
//! closed after the HTTP server has drained.

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Embedded schema migrations (`resvctl-server/migrations`).
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection string for a private in-memory database.
const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Errors opening or preparing the store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("failed to open database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] MigrateError),
}

/// Handle to the single database connection.
///
/// Cloning shares the same connection; it does not open a new one.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the database at `database_url` with foreign keys enforced.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::open("sqlite://resvctl.db?mode=rwc").await?;
    /// store.migrate().await?;
    /// ```
    pub async fn open(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StoreError::InvalidUrl)?
            .foreign_keys(true);

        // One connection, never recycled: an in-memory database lives
        // exactly as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;

        tracing::debug!(url = %redact(database_url), "database opened");
        Ok(Self { pool })
    }

    /// Open a fresh, empty in-memory database.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(IN_MEMORY_URL).await
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("database schema up to date");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// Strip the query string so connection options never reach the logs.
fn redact(database_url: &str) -> &str {
    database_url
        .split_once('?')
        .map_or(database_url, |(base, _)| base)
}
