//! KVStore Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// KVStore result type alias
pub type KvResult<T> = Result<T, KvError>;

/// KVStore error variants
#[derive(Debug, Error)]
pub enum KvError {
    /// A required setting has never been written
    #[error("{0}")]
    NotConfigured(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl KvError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            KvError::NotConfigured(_) => ErrorKind::NotFound,
            KvError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            KvError::NotConfigured(message) => {
                tracing::debug!(message = %message, "Setting not configured");
            }
            KvError::Database(e) => {
                tracing::error!(error = %e, "KVStore database error");
            }
        }
    }
}

impl IntoResponse for KvError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Storage details stay in the log
            KvError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}
