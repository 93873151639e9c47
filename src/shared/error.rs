//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    pub error: String,
}

impl AppError {
    /// Machine-readable error category.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::BadRequest(_) | AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "INTEGRITY_ERROR",
            AppError::Internal(_) | AppError::Database(_) | AppError::Io(_) => "UNEXPECTED_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) | AppError::Database(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, error) = match &self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::Validation(msg) => (msg.clone(), self.kind().to_string()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ("Unexpected error".to_string(), detail.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ("Unexpected error".to_string(), e.to_string())
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {}", e);
                ("Unexpected error".to_string(), e.to_string())
            }
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message,
            error,
        };

        (status, Json(body)).into_response()
    }
}
