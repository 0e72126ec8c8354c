//! Opening the employee database.
//!
//! The database is a single `SQLite` file (or an in-memory database in tests).
//! Opening it creates the file when absent and applies the embedded
//! migrations, so a fresh start always ends with an `employees` table.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Where the employee database lives.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:employees.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Private in-memory database, discarded when the last connection closes.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
        }
    }

    /// Database stored in the file at `path`.
    #[must_use]
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}", path.as_ref().display()),
        }
    }

    /// Open the database, creating the file and the `employees` table if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] when the URL is invalid or the file
    /// cannot be opened, and [`StorageError::Migration`] when the schema cannot
    /// be applied.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(url = %self.database_url, "employee database ready");

        Ok(Database { pool })
    }
}

/// An open employee database.
///
/// Repositories receive a clone of [`Database::pool`] and acquire one
/// connection per operation from it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Borrow the connection source handed to repositories.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close them all.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
