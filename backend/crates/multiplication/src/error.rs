//! Multiplication Error Types
//!
//! This module provides domain-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind};
use thiserror::Error;

pub type MultiplicationResult<T> = Result<T, MultiplicationError>;

/// Multiplication-specific error variants
///
/// Each variant maps to an HTTP status code and converts into `AppError`
/// for the response body.
#[derive(Debug, Error)]
pub enum MultiplicationError {
    /// Inbound attempt already claims to be correct
    #[error("You can't send an attempt marked as correct")]
    TamperedAttempt,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MultiplicationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MultiplicationError::Database(e) => classify_sqlx_error(e).0,
            MultiplicationError::TamperedAttempt | MultiplicationError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    fn log(&self) {
        match self {
            MultiplicationError::Database(e) if self.kind().is_server_error() => {
                tracing::error!(
                    error = %e,
                    status = %self.status_code(),
                    "Multiplication database error"
                );
            }
            MultiplicationError::Database(e) => {
                tracing::warn!(
                    error = %e,
                    status = %self.status_code(),
                    "Multiplication database rejection"
                );
            }
            MultiplicationError::Internal(msg) => {
                tracing::error!(message = %msg, "Multiplication internal error");
            }
            MultiplicationError::TamperedAttempt => {
                tracing::error!("Attempt submitted pre-marked as correct");
            }
        }
    }
}

impl From<MultiplicationError> for AppError {
    fn from(err: MultiplicationError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            MultiplicationError::TamperedAttempt => AppError::new(kind, message)
                .with_action("Submit the attempt without setting `correct`"),
            // Server-side details stay in the logs
            MultiplicationError::Database(e) => AppError::from(e),
            MultiplicationError::Internal(_) => AppError::new(kind, kind.as_str()),
        }
    }
}

impl IntoResponse for MultiplicationError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
