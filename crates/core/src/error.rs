use thiserror::Error;

use crate::constants::{MAX_PAGE_SIZE, MAX_QUERY_CHARS};

/// Rejected caller input. Never retried, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Query is {len} characters long; the maximum is {MAX_QUERY_CHARS}")]
    QueryTooLong { len: usize },

    #[error("page must be greater than or equal to 1")]
    InvalidPage,

    #[error("page_size must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidPageSize,
}
