//! Verification Error Types
//!
//! This module provides verification-specific error variants that
//! integrate with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Verification-specific result type alias
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Verification-specific error variants
#[derive(Debug, Error)]
pub enum VerificationError {
    /// No live verification entry for this email (never sent, or expired)
    #[error("Verification code not found or expired")]
    VerificationNotFound,

    /// Attempt cap reached for the current code
    #[error("Too many verification attempts")]
    TooManyAttempts,

    /// Submitted code does not match the sent one
    #[error("Verification code does not match")]
    AuthCodeMismatch,

    /// Mail transport failed to deliver the code
    #[error("Failed to send verification email")]
    EmailSendFail,

    /// Request field validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Code store error
    #[error("Verification store error: {0}")]
    Store(#[from] redis::RedisError),

    /// Entry (de)serialization error
    #[error("Verification entry serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VerificationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            VerificationError::VerificationNotFound => StatusCode::NOT_FOUND,
            VerificationError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            VerificationError::AuthCodeMismatch => StatusCode::UNAUTHORIZED,
            VerificationError::Validation(_) => StatusCode::BAD_REQUEST,
            VerificationError::EmailSendFail
            | VerificationError::Store(_)
            | VerificationError::Serialization(_)
            | VerificationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerificationError::VerificationNotFound => ErrorKind::NotFound,
            VerificationError::TooManyAttempts => ErrorKind::TooManyRequests,
            VerificationError::AuthCodeMismatch => ErrorKind::Unauthorized,
            VerificationError::Validation(_) => ErrorKind::BadRequest,
            VerificationError::EmailSendFail
            | VerificationError::Store(_)
            | VerificationError::Serialization(_)
            | VerificationError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            VerificationError::Store(e) => {
                tracing::error!(error = %e, "Verification store error");
            }
            VerificationError::Serialization(e) => {
                tracing::error!(error = %e, "Verification entry serialization error");
            }
            VerificationError::Internal(msg) => {
                tracing::error!(message = %msg, "Verification internal error");
            }
            VerificationError::EmailSendFail => {
                tracing::warn!("Verification email send failed");
            }
            VerificationError::TooManyAttempts => {
                tracing::warn!("Verification attempt cap reached");
            }
            _ => {
                tracing::debug!(error = %self, "Verification error");
            }
        }
    }
}

impl IntoResponse for VerificationError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
