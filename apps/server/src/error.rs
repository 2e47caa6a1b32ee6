//! API error mapping.
//!
//! Every failure becomes a non-2xx status with a JSON `{"error": ...}` body.
//! Validation and ownership messages pass through; upstream and internal
//! details are logged and replaced by a stable message so nothing sensitive
//! leaks to clients.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use finwise_ai::AiError;
use finwise_core::errors::{DatabaseError, Error as CoreError};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    Ai(AiError),
    BadRequest(String),
    Unauthorized(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Core(err)
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        // Core errors surfacing through the assistant keep their own mapping.
        match err {
            AiError::Core(core) => ApiError::Core(core),
            other => ApiError::Ai(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

fn core_response(err: CoreError) -> (StatusCode, String) {
    match err {
        CoreError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, "Access denied".to_string()),
        CoreError::Database(DatabaseError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Record not found".to_string())
        }
        CoreError::Upstream(detail) => {
            tracing::error!("Upstream service failure: {}", detail);
            (
                StatusCode::BAD_GATEWAY,
                "Upstream service unavailable".to_string(),
            )
        }
        other => {
            tracing::error!("Internal error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

fn ai_response(err: AiError) -> (StatusCode, String) {
    match err {
        AiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        AiError::MissingApiKey(_) | AiError::Provider(_) => {
            tracing::error!("Assistant provider failure: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                "Assistant is temporarily unavailable".to_string(),
            )
        }
        other => {
            tracing::error!("Assistant internal error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Core(err) => core_response(err),
            ApiError::Ai(err) => ai_response(err),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
