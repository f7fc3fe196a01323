//! Typed API error for HTTP handlers.
//!
//! Converts service errors into proper HTTP responses with JSON body and
//! status codes. Handlers return `Result<Json<T>, ApiError>` instead of
//! losing error context with bare `StatusCode`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vexchat_service::ServiceError;
use vexchat_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input from caller. Never retried.
    BadRequest(String),
    /// 404 Not Found — requested resource doesn't exist.
    NotFound(String),
    /// 422 Unprocessable Entity — valid syntax but semantic rejection
    /// (duplicate session id).
    UnprocessableEntity(String),
    /// 500 Internal Server Error — the completion API call failed. The
    /// underlying message is surfaced to the caller; no retry.
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Upstream(msg) => {
                tracing::error!(error = %msg, "completion call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(StorageError::Duplicate(msg)) => Self::UnprocessableEntity(msg),
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Llm(e) => Self::Upstream(format!("Failed to generate response: {e}")),
        }
    }
}
