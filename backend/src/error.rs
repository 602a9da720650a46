//! Error handling for the Farm Registry
//!
//! Every failure leaves a handler through the uniform response shape:
//! `{"success": false, "error": <category>, "message"?, "issues"?}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::validation::FieldIssue;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed")]
    Validation { issues: Vec<FieldIssue> },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("{0} não encontrado")]
    NotFound(String),

    // Database errors
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    // Internal errors
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(issues: Vec<FieldIssue>) -> Self {
        Self::Validation { issues }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<FieldIssue>>,
}

impl ErrorBody {
    fn new(category: &str, message: Option<String>, issues: Option<Vec<FieldIssue>>) -> Self {
        Self {
            success: false,
            error: category.to_string(),
            message,
            issues,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("request failed: {:?}", self);

        let (status, body) = match self {
            AppError::Validation { issues } => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("validation failed", None, Some(issues)),
            ),
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorBody::new("conflict", Some(message), None),
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("not found", Some(format!("{} não encontrado", resource)), None),
            ),
            AppError::Database(err) => database_body(err),
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("internal error", Some(err.to_string()), None),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Map a store failure onto the response taxonomy.
///
/// A unique-constraint violation is the store-side safety net behind the
/// two-step check-then-insert flow and surfaces as a conflict; a missing row
/// surfaces as not-found; anything else is internal and carries the driver's
/// message.
fn database_body(err: sqlx::Error) -> (StatusCode, ErrorBody) {
    match &err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            ErrorBody::new("not found", Some("Registro não encontrado".to_string()), None),
        ),
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            (
                StatusCode::CONFLICT,
                ErrorBody::new("conflict", Some("Registro duplicado".to_string()), None),
            )
        }
        _ => {
            let message = err.to_string();
            let message = if message.is_empty() {
                "erro desconhecido".to_string()
            } else {
                message
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("internal error", Some(message), None),
            )
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
