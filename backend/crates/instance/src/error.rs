//! Compute Proxy Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kvstore::KvError;
use std::fmt;
use thiserror::Error;

/// Compute proxy result type alias
pub type InstanceResult<T> = Result<T, InstanceError>;

/// Error code used when the provider could not be reached or understood
pub const CLIENT_NETWORK_ERROR: &str = "ClientNetworkError";

/// Failure reported by, or while talking to, the compute provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TencentCloudError {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

impl TencentCloudError {
    /// Transport or decoding failure; there is no provider request id
    pub fn network(err: impl fmt::Display) -> Self {
        Self {
            code: CLIENT_NETWORK_ERROR.to_string(),
            message: err.to_string(),
            request_id: None,
        }
    }
}

impl fmt::Display for TencentCloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[TencentCloudSDKException] code:{} message:{} requestId:{}",
            self.code,
            self.message,
            self.request_id.as_deref().unwrap_or_default()
        )
    }
}

impl std::error::Error for TencentCloudError {}

/// Compute proxy error variants
#[derive(Debug, Error)]
pub enum InstanceError {
    /// The provider rejected or failed a call; the text goes to the client as is
    #[error(transparent)]
    Upstream(#[from] TencentCloudError),

    /// Credentials missing or unreadable
    #[error(transparent)]
    Settings(#[from] KvError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InstanceError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            InstanceError::Upstream(_) => ErrorKind::BadRequest,
            InstanceError::Settings(e) => e.kind(),
            InstanceError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            InstanceError::Upstream(e) => {
                tracing::warn!(
                    code = %e.code,
                    request_id = e.request_id.as_deref().unwrap_or("-"),
                    "Compute provider call failed"
                );
            }
            InstanceError::Settings(e) => e.log(),
            InstanceError::Internal(msg) => {
                tracing::error!(message = %msg, "Compute proxy internal error");
            }
        }
    }
}

impl IntoResponse for InstanceError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
