//! Accounts Error Types
//!
//! This module provides accounts-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountsResult<T> = Result<T, AccountsError>;

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountsError {
    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password (never disclosed which)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed, or unverifiable bearer token
    #[error("Missing or invalid authentication token")]
    TokenInvalid,

    /// Request field validation error
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountsError::EmailTaken => ErrorKind::Conflict,
            AccountsError::InvalidCredentials | AccountsError::TokenInvalid => {
                ErrorKind::Unauthorized
            }
            AccountsError::Validation(_) => ErrorKind::BadRequest,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Database errors go through the kernel sqlx mapping so that e.g.
    /// a unique-constraint race still surfaces as Conflict.
    pub fn into_app_error(self) -> AppError {
        match self {
            AccountsError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountsError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountsError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountsError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountsError::TokenInvalid => {
                tracing::warn!("Rejected request with invalid token");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AccountsError {
    fn from(err: AppError) -> Self {
        AccountsError::Internal(err.to_string())
    }
}
