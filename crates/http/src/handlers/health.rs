use axum::Json;

use travel_qa_core::{API_NAME, API_VERSION};

use crate::response_types::{ChatDependencies, ChatHealthResponse, HealthResponse, RootResponse};

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: API_NAME,
        version: API_VERSION,
        docs_url: "/docs",
        health_check: "/health",
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", message: "API is running successfully" })
}

/// Static: dependencies are reported as configured, not probed.
pub async fn chat_health() -> Json<ChatHealthResponse> {
    Json(ChatHealthResponse {
        service: "chat",
        status: "healthy",
        timestamp: chrono::Utc::now(),
        dependencies: ChatDependencies { database: "connected", openai_api: "configured" },
    })
}
