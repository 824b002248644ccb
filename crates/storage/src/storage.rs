use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use travel_qa_core::env_parse_with_default;

use crate::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Query history store wrapping a `SQLite` connection pool.
///
/// Cheap to clone; every clone shares the same pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Concurrency settings applied to every pooled connection.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )
}

fn db_pool_size() -> u32 {
    env_parse_with_default("TRAVEL_QA_DB_POOL_SIZE", 8u32).max(1)
}

/// Turns a `DATABASE_URL` value into a filesystem path.
///
/// Accepts `sqlite:///relative.db`, `sqlite:////abs/path.db`, `sqlite://x.db`
/// and bare paths.
#[must_use]
pub fn db_path_from_url(url: &str) -> PathBuf {
    let url = url.trim();
    let path = url
        .strip_prefix("sqlite:///")
        .or_else(|| url.strip_prefix("sqlite://"))
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    PathBuf::from(path)
}

impl Storage {
    /// Opens (creating if needed) the database at `db_path` and initializes the schema.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or the schema cannot be created.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let storage = Self { pool };
        storage.initialize()?;

        tracing::info!(
            pool_size = pool_size,
            path = %db_path.display(),
            "Storage initialized with connection pool"
        );

        Ok(storage)
    }

    /// Ensures the `queries` table and its two indexes exist. Idempotent.
    ///
    /// # Errors
    /// Returns error if a connection cannot be obtained or the DDL fails.
    pub fn initialize(&self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        migrations::run_migrations(&conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_from_url_relative() {
        assert_eq!(db_path_from_url("sqlite:///./qa_system.db"), PathBuf::from("./qa_system.db"));
    }

    #[test]
    fn test_db_path_from_url_absolute() {
        assert_eq!(db_path_from_url("sqlite:////var/lib/qa.db"), PathBuf::from("/var/lib/qa.db"));
    }

    #[test]
    fn test_db_path_from_url_bare_path() {
        assert_eq!(db_path_from_url("data/qa.db"), PathBuf::from("data/qa.db"));
        assert_eq!(db_path_from_url("sqlite://qa.db"), PathBuf::from("qa.db"));
    }
}
