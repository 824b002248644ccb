//! Request/query types (Deserialize)

use serde::Deserialize;
use travel_qa_core::DEFAULT_PAGE_SIZE;

const fn default_page() -> u32 {
    1
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub query: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Range checks happen in `PageRequest::new`, so out-of-range values get the
/// same 400 message whether they came from HTTP or the CLI.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}
