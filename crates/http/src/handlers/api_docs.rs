//! Static API documentation data.

use axum::Json;

use travel_qa_core::{API_NAME, API_VERSION};

use crate::response_types::{ApiDocsResponse, EndpointDoc, ParamDoc};

pub async fn get_api_docs() -> Json<ApiDocsResponse> {
    Json(api_docs())
}

/// Returns documentation for every route the router serves.
pub fn api_docs() -> ApiDocsResponse {
    ApiDocsResponse {
        title: API_NAME,
        version: API_VERSION,
        endpoints: vec![
            EndpointDoc {
                path: "/api/chat/query",
                method: "POST",
                description: "Submit a question and receive an AI-generated response",
                params: vec![
                    ParamDoc {
                        name: "query",
                        location: "body",
                        required: true,
                        description: "Question text, 1 to 1000 characters, not blank",
                    },
                    ParamDoc {
                        name: "user_id",
                        location: "body",
                        required: false,
                        description: "User identifier for history tracking",
                    },
                ],
            },
            EndpointDoc {
                path: "/api/chat/history",
                method: "GET",
                description: "Previous queries, newest first, with pagination",
                params: vec![
                    ParamDoc {
                        name: "user_id",
                        location: "query",
                        required: false,
                        description: "Filter by user ID",
                    },
                    ParamDoc {
                        name: "page",
                        location: "query",
                        required: false,
                        description: "Page number, starts from 1 (default 1)",
                    },
                    ParamDoc {
                        name: "page_size",
                        location: "query",
                        required: false,
                        description: "Items per page, 1 to 100 (default 10)",
                    },
                ],
            },
            EndpointDoc {
                path: "/api/chat/history/{id}",
                method: "GET",
                description: "A single stored query",
                params: vec![ParamDoc {
                    name: "id",
                    location: "path",
                    required: true,
                    description: "Query ID",
                }],
            },
            EndpointDoc {
                path: "/api/chat/history/{id}",
                method: "DELETE",
                description: "Acknowledge a delete request; history is not modified",
                params: vec![ParamDoc {
                    name: "id",
                    location: "path",
                    required: true,
                    description: "Query ID",
                }],
            },
            EndpointDoc {
                path: "/api/chat/stats",
                method: "GET",
                description: "Total query count and system status",
                params: vec![],
            },
            EndpointDoc {
                path: "/api/chat/health",
                method: "GET",
                description: "Chat service health check",
                params: vec![],
            },
            EndpointDoc {
                path: "/",
                method: "GET",
                description: "API identity",
                params: vec![],
            },
            EndpointDoc {
                path: "/health",
                method: "GET",
                description: "Liveness check",
                params: vec![],
            },
        ],
    }
}
