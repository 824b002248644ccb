//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error. Callers do not retry any of these.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL or connection failure reported by SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Caller passed an argument the store cannot execute (e.g. `limit = 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StorageError {
    /// Whether SQLite reported lock contention rather than a hard failure.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if matches!(e.code, rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: i32) -> StorageError {
        StorageError::Database(rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(code), None))
    }

    #[test]
    fn test_is_busy_for_lock_contention() {
        assert!(sqlite_failure(rusqlite::ffi::SQLITE_BUSY).is_busy());
        assert!(sqlite_failure(rusqlite::ffi::SQLITE_LOCKED).is_busy());
    }

    #[test]
    fn test_is_busy_false_for_other_failures() {
        assert!(!sqlite_failure(rusqlite::ffi::SQLITE_CORRUPT).is_busy());
        assert!(!StorageError::InvalidArgument("limit".to_owned()).is_busy());
    }
}
