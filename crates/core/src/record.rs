use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored query/response pair.
///
/// `id` and `created_at` are assigned by the store on insert and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: i64,
    pub query: String,
    pub response: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Wall-clock seconds spent in the completion call that produced `response`.
    pub response_time: Option<f64>,
    pub success: bool,
}

/// Insert payload for the store. Everything the store does not assign itself.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuery {
    pub query: String,
    pub response: String,
    pub user_id: Option<String>,
    pub response_time: Option<f64>,
}

impl NewQuery {
    #[must_use]
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self { query: query.into(), response: response.into(), user_id: None, response_time: None }
    }

    #[must_use]
    pub fn user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    #[must_use]
    pub const fn response_time(mut self, seconds: Option<f64>) -> Self {
        self.response_time = seconds;
        self
    }
}

/// A slice of records plus the number of records matching the filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matching records ignoring `offset` and `limit`.
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64, offset: u64, limit: u64) -> Self {
        Self { items, total, offset, limit }
    }
}
