//! Typed API error for HTTP handlers.
//!
//! Every error leaves the server as `{"error", "message", "detail"}` with a
//! matching status code. Server-side failures log their cause and return a
//! fixed message; nothing internal reaches the caller.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use travel_qa_service::ServiceError;

const UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";
const GENERATE_FAILED: &str = "Failed to generate AI response";

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
    detail: Option<&'a str>,
}

/// API error with HTTP status code and caller-facing message.
///
/// Use via `Result<Json<T>, ApiError>` in handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested record doesn't exist.
    NotFound(String),
    /// 500 Internal Server Error. `cause` is logged, `message` is sent.
    Internal { message: &'static str, cause: String },
}

impl ApiError {
    /// Wraps a service failure, sending `message` if it turns out to be a
    /// server-side error.
    pub fn from_service(err: ServiceError, message: &'static str) -> Self {
        match err {
            ServiceError::Validation(e) => Self::BadRequest(e.to_string()),
            ServiceError::Completion(e) => {
                Self::Internal { message, cause: format!("[{}] {e}", e.category()) }
            },
            ServiceError::Storage(e) if e.is_busy() => {
                tracing::warn!("database busy past timeout");
                Self::Internal { message, cause: format!("database busy: {e}") }
            },
            other => Self::Internal { message, cause: other.to_string() },
        }
    }

    /// Like [`Self::from_service`] for the submit flow: only a failed
    /// completion reports that the answer could not be generated.
    pub fn from_submit(err: ServiceError) -> Self {
        match err {
            ServiceError::Completion(_) => Self::from_service(err, GENERATE_FAILED),
            other => Self::from_service(other, UNEXPECTED),
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "Bad request",
            Self::NotFound(_) => "Not found",
            Self::Internal { .. } => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match &self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.as_str(),
            Self::Internal { message, cause } => {
                tracing::error!(error = %cause, "internal server error");
                *message
            },
        };
        let body = ErrorBody { error: kind, message, detail: None };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::from_service(err, UNEXPECTED)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Response for a handler panic caught by `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    ApiError::Internal { message: UNEXPECTED, cause: format!("handler panicked: {detail}") }
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use travel_qa_core::ValidationError;
    use travel_qa_llm::LlmError;
    use travel_qa_storage::StorageError;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        body_json_from(err.into_response()).await
    }

    async fn body_json_from(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(ServiceError::Validation(ValidationError::EmptyQuery));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad request");
        assert_eq!(body["message"], "Query cannot be empty");
        assert!(body["detail"].is_null());
    }

    #[tokio::test]
    async fn test_submit_completion_failure_message() {
        let err = ApiError::from_submit(ServiceError::Completion(LlmError::EmptyResponse));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], GENERATE_FAILED);
    }

    #[tokio::test]
    async fn test_submit_storage_failure_is_not_blamed_on_completion() {
        let err = ApiError::from_submit(ServiceError::Storage(StorageError::InvalidArgument(
            "disk full".to_owned(),
        )));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], UNEXPECTED);
        assert!(!body.to_string().contains("disk full"));

        let err = ApiError::from_submit(ServiceError::MissingAfterInsert(7));
        let (_, body) = body_json(err).await;
        assert_eq!(body["message"], UNEXPECTED);
    }

    #[tokio::test]
    async fn test_submit_validation_stays_bad_request() {
        let err = ApiError::from_submit(ServiceError::Validation(ValidationError::EmptyQuery));
        let (status, _) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_hides_cause() {
        let err = ApiError::Internal {
            message: "Failed to retrieve query history",
            cause: "disk I/O error at /var/secret.db".to_owned(),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "Failed to retrieve query history");
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_panic_response_is_generic() {
        let (status, body) = body_json_from(panic_response(Box::new("boom at line 3"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], UNEXPECTED);
        assert!(!body.to_string().contains("boom"));
    }
}
