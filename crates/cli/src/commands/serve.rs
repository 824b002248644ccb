use anyhow::Result;
use std::sync::Arc;

use travel_qa_http::{AppState, allowed_origins_from_env, cors_layer, create_router};
use travel_qa_service::ChatService;

use crate::{build_client, open_storage};

pub(crate) async fn run(host: String, port: u16) -> Result<()> {
    let storage = open_storage()?;
    let llm = build_client()?;
    let chat = Arc::new(ChatService::new(storage, llm));
    let state = Arc::new(AppState::new(chat));

    let origins = allowed_origins_from_env();
    tracing::info!(origins = ?origins, "CORS allow-list");
    let router = create_router(state, cors_layer(&origins));

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting HTTP server on {}", addr);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("HTTP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl-C, graceful shutdown disabled: {}", e);
            std::future::pending::<()>().await;
        },
    }
}
