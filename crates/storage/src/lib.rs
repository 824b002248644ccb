//! Storage layer for travel-qa
//!
//! A single `queries` table in SQLite behind an r2d2 connection pool.
//! All methods are synchronous; async callers run them on the blocking pool.

mod error;
mod migrations;
mod queries;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use storage::{Storage, db_path_from_url};
