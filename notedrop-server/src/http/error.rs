//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": …}` JSON responses at this single
//! boundary: 400 for client input problems, 500 for anything database-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No connection could be produced (500, "DB not connected")
    DbUnavailable,

    /// Request body was not a usable JSON object (400)
    NoJson,

    /// Validation failed (400)
    Validation(ValidationError),

    /// Statement execution failed (500, error text passed through)
    Query(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::DbUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB not connected".to_string(),
            ),
            Self::NoJson => (StatusCode::BAD_REQUEST, "No JSON data".to_string()),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Query(e) => {
                tracing::error!(error = %e, "query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Unconfigured | DbError::Connect(_) => Self::DbUnavailable,
            DbError::Query(_) => Self::Query(e),
        }
    }
}
