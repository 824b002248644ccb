//! Response types (Serialize)

use chrono::{DateTime, Utc};
use serde::Serialize;
use travel_qa_core::QueryRecord;

/// One query/response pair as seen by API callers.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub id: i64,
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub response_time: Option<f64>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl From<QueryRecord> for QueryResponse {
    fn from(record: QueryRecord) -> Self {
        Self {
            id: record.id,
            query: record.query,
            response: record.response,
            timestamp: record.created_at,
            response_time: record.response_time,
            success: record.success,
            user_id: record.user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub queries: Vec<QueryResponse>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_queries: u64,
    pub system_status: &'static str,
    pub api_version: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatDependencies {
    pub database: &'static str,
    pub openai_api: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatHealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub dependencies: ChatDependencies,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub docs_url: &'static str,
    pub health_check: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    pub location: &'static str,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamDoc>,
}

#[derive(Debug, Serialize)]
pub struct ApiDocsResponse {
    pub title: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointDoc>,
}
