//! HTTP API server for travel-qa.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod cors;
mod extract;
mod handlers;
mod query_types;
mod response_types;


use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use travel_qa_service::ChatService;

pub use api_error::ApiError;
pub use cors::{allowed_origins_from_env, cors_layer, parse_origins};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup; the store and completion client live inside the
/// service and are shared by every request.
pub struct AppState {
    pub chat: Arc<ChatService>,
}

impl AppState {
    #[must_use]
    pub const fn new(chat: Arc<ChatService>) -> Self {
        Self { chat }
    }
}

pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    let chat = Router::new()
        .route("/query", post(handlers::chat::submit_query))
        .route("/history", get(handlers::chat::get_history))
        .route(
            "/history/{id}",
            get(handlers::chat::get_query).delete(handlers::chat::delete_query),
        )
        .route("/stats", get(handlers::chat::get_stats))
        .route("/health", get(handlers::health::chat_health));

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/docs", get(handlers::api_docs::get_api_docs))
        .nest("/api/chat", chat)
        .with_state(state)
        .layer(CatchPanicLayer::custom(api_error::panic_response))
        .layer(cors)
}
