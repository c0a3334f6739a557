//! Boards Error Types
//!
//! This module provides board-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use serde::Serialize;
use thiserror::Error;

/// Boards-specific result type alias
pub type BoardsResult<T> = Result<T, BoardsError>;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Boards-specific error variants
///
/// These map to the HTTP responses of the board-creation endpoint:
/// exactly one response per request, no retries.
#[derive(Debug, Error)]
pub enum BoardsError {
    /// No authenticated session resolved for the request
    #[error("Not authenticated")]
    Unauthenticated,

    /// Request body failed schema validation
    #[error("Board validation failed")]
    Validation(Vec<ValidationIssue>),

    /// Requested owner differs from the session identity
    #[error("Cannot create board for another user")]
    ForeignOwner,

    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BoardsError::Unauthenticated => StatusCode::UNAUTHORIZED,
            BoardsError::Validation(_) => StatusCode::BAD_REQUEST,
            BoardsError::ForeignOwner => StatusCode::FORBIDDEN,
            BoardsError::Configuration(_) | BoardsError::Database(_) | BoardsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardsError::Unauthenticated => ErrorKind::Unauthorized,
            BoardsError::Validation(_) => ErrorKind::BadRequest,
            BoardsError::ForeignOwner => ErrorKind::Forbidden,
            BoardsError::Configuration(_) | BoardsError::Database(_) | BoardsError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BoardsError::Database(e) => {
                tracing::error!(error = %e, "Boards database error");
            }
            BoardsError::Configuration(msg) => {
                tracing::error!(message = %msg, "Boards configuration error");
            }
            BoardsError::Internal(msg) => {
                tracing::error!(message = %msg, "Boards internal error");
            }
            BoardsError::ForeignOwner => {
                tracing::warn!("Board creation attempted for another user");
            }
            _ => {
                tracing::debug!(error = %self, "Boards error");
            }
        }
    }
}

impl IntoResponse for BoardsError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();

        // Response bodies follow the endpoint contract: 400 carries the
        // field-level issues, 5xx carries the underlying error text.
        let body = match &self {
            BoardsError::Validation(issues) => serde_json::json!({
                "message": self.to_string(),
                "errors": issues,
            }),
            BoardsError::Configuration(_) | BoardsError::Database(_) | BoardsError::Internal(_) => {
                serde_json::json!({
                    "message": "Failed to create board",
                    "error": self.to_string(),
                })
            }
            _ => serde_json::json!({
                "message": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<auth::AuthError> for BoardsError {
    fn from(err: auth::AuthError) -> Self {
        match err {
            auth::AuthError::SessionInvalid => BoardsError::Unauthenticated,
            auth::AuthError::Database(e) => BoardsError::Database(e),
            auth::AuthError::Internal(msg) => BoardsError::Internal(msg),
        }
    }
}
