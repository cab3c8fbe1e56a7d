//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce the `{success: false, message}`
//! envelope with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use leadflow_core::IntakeResponse;

/// API errors with HTTP status code mapping.
///
/// The carried string is the human-readable message sent to the caller.
/// Internal details belong in logs, not here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::InternalError(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = IntakeResponse::failed(self.message());
        (self.status(), axum::Json(body)).into_response()
    }
}
