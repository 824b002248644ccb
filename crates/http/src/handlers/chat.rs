use axum::{Json, extract::State};
use std::sync::Arc;

use travel_qa_core::PageRequest;

use crate::AppState;
use crate::api_error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query_types::{HistoryQuery, SubmitRequest};
use crate::response_types::{DeleteResponse, HistoryResponse, QueryResponse, StatsResponse};

pub async fn submit_query(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SubmitRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let record = state
        .chat
        .submit(req.query, req.user_id)
        .await
        .map_err(ApiError::from_submit)?;
    Ok(Json(record.into()))
}

pub async fn get_history(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let page = PageRequest::new(query.page, query.page_size)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let history = state
        .chat
        .history(query.user_id, page)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to retrieve query history"))?;
    Ok(Json(HistoryResponse {
        queries: history.records.into_iter().map(QueryResponse::from).collect(),
        total_count: history.total_count,
        page: history.page,
        page_size: history.page_size,
    }))
}

pub async fn get_query(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<QueryResponse>, ApiError> {
    let record = state
        .chat
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to retrieve query"))?
        .ok_or_else(|| ApiError::NotFound(format!("Query {id} not found")))?;
    Ok(Json(record.into()))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let total_queries = state
        .chat
        .total_queries()
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to retrieve system statistics"))?;
    Ok(Json(StatsResponse {
        total_queries,
        system_status: "operational",
        api_version: travel_qa_core::API_VERSION,
        timestamp: chrono::Utc::now(),
    }))
}

/// Reports success without touching the store. Records are never removed.
pub async fn delete_query(ApiPath(id): ApiPath<i64>) -> Json<DeleteResponse> {
    tracing::info!(id, "delete requested; history is append-only, nothing removed");
    Json(DeleteResponse { message: format!("Query {id} deleted successfully"), success: true })
}
