//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::application::token::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Bearer token failed to parse or verify
    ///
    /// The reason is kept for logs; clients only ever see "Invalid token".
    #[error("Invalid token")]
    InvalidToken(TokenError),

    /// Registration attempted with the wrong shared secret
    #[error("Invalid token")]
    InvalidRegistrationSecret,

    /// Token header absent from a guarded request
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Username rejected before touching storage
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Database error (includes duplicate usernames on register)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::InvalidToken(_)
            | AuthError::InvalidRegistrationSecret => ErrorKind::Unauthorized,
            AuthError::MissingHeader(_) | AuthError::InvalidUsername(_) => {
                ErrorKind::UnprocessableEntity
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken(reason) => {
                tracing::warn!(reason = %reason, "Rejected bearer token");
            }
            AuthError::InvalidRegistrationSecret => {
                tracing::warn!("Registration attempted with wrong secret");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Storage details stay in the log
            AuthError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::InvalidToken(err)
    }
}

impl From<platform::client::HeaderError> for AuthError {
    fn from(err: platform::client::HeaderError) -> Self {
        match err {
            platform::client::HeaderError::MissingHeader(header) => {
                AuthError::MissingHeader(header)
            }
            platform::client::HeaderError::InvalidHeader(_) => {
                AuthError::InvalidToken(TokenError::Malformed)
            }
        }
    }
}
