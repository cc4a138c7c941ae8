//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Body of both login and register
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Query string of POST /auth/register
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterQuery {
    /// The shared server secret
    pub token: String,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
