//! Posts Error Types
//!
//! This module provides posts-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Posts-specific result type alias
pub type PostsResult<T> = Result<T, PostsError>;

/// Posts-specific error variants
#[derive(Debug, Error)]
pub enum PostsError {
    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// Authenticated user is not the post owner
    #[error("You are not the owner of this post")]
    NotPostOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostsError::PostNotFound => ErrorKind::NotFound,
            PostsError::NotPostOwner => ErrorKind::Forbidden,
            PostsError::Database(_) | PostsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database errors go through the kernel sqlx mapping.
    pub fn into_app_error(self) -> AppError {
        match self {
            PostsError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostsError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostsError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            PostsError::NotPostOwner => {
                tracing::warn!("Rejected mutation by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostsError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for PostsError {
    fn from(err: AppError) -> Self {
        PostsError::Internal(err.to_string())
    }
}
