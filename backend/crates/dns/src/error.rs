//! DNS Proxy Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kvstore::KvError;
use thiserror::Error;

/// DNS proxy result type alias
pub type DnsResult<T> = Result<T, DnsError>;

/// DNS proxy error variants
#[derive(Debug, Error)]
pub enum DnsError {
    /// The managed domain is not a zone of the account
    #[error("Domain {0} not found in your Cloudflare account.")]
    ZoneNotFound(String),

    /// The provider answered with a non-success status
    #[error("Cloudflare API error ({status}): {message}")]
    UpstreamStatus { status: u16, message: String },

    /// The provider could not be reached or its reply could not be read
    #[error("Cloudflare API unreachable: {0}")]
    Transport(String),

    /// API token or managed domain missing, or the store failed
    #[error(transparent)]
    Settings(#[from] KvError),
}

impl DnsError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DnsError::ZoneNotFound(_) => ErrorKind::NotFound,
            DnsError::UpstreamStatus { status, .. } => ErrorKind::from_status_code(*status),
            DnsError::Transport(_) => ErrorKind::BadGateway,
            DnsError::Settings(e) => e.kind(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            DnsError::UpstreamStatus { status, .. } => {
                AppError::from_status(*status, self.to_string())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DnsError::ZoneNotFound(domain) => {
                tracing::warn!(domain = %domain, "Managed domain has no zone");
            }
            DnsError::UpstreamStatus { status, message } => {
                tracing::warn!(status = status, message = %message, "Cloudflare call rejected");
            }
            DnsError::Transport(msg) => {
                tracing::warn!(error = %msg, "Cloudflare call failed");
            }
            DnsError::Settings(e) => e.log(),
        }
    }
}

impl IntoResponse for DnsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<reqwest::Error> for DnsError {
    fn from(err: reqwest::Error) -> Self {
        DnsError::Transport(err.to_string())
    }
}
