//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::{DomainError, DomainValidationError, ErrorRecord};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation failure reported by its first bare message.
    #[error("Validation error: {0}")]
    Validation(#[from] DomainValidationError),

    /// Validation failure reported by the combined `"{context}: {message}"` text.
    #[error("Validation error: {0}")]
    ValidationSummary(DomainValidationError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => Self::Validation(e),
            other => Self::BadRequest(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Field-level validation error
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub context: String,
    pub message: String,
}

impl From<&ErrorRecord> for FieldError {
    fn from(record: &ErrorRecord) -> Self {
        Self {
            context: record.context.clone(),
            message: record.message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, errors) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            AppError::Validation(e) => {
                let message = e
                    .first_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string());
                let fields = e.errors().iter().map(FieldError::from).collect();
                (StatusCode::BAD_REQUEST, message, Some(fields))
            }
            AppError::ValidationSummary(e) => {
                let fields = e.errors().iter().map(FieldError::from).collect();
                (StatusCode::BAD_REQUEST, e.to_string(), Some(fields))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorResponse { error, errors })).into_response()
    }
}
