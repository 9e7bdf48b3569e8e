//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use cardsift_core::ScanError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Scan(ScanError::InvalidEncoding) => (StatusCode::BAD_REQUEST, "decode_error"),
            ApiError::Scan(ScanError::UnsupportedExtension { .. }) => {
                (StatusCode::BAD_REQUEST, "unsupported_file")
            }
            ApiError::Scan(_) => (StatusCode::INTERNAL_SERVER_ERROR, "export_error"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
