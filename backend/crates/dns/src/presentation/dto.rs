//! Request and Response DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DeleteRecordQuery {
    pub cf_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordQuery {
    pub prefix: String,
    pub a_record: String,
}

#[derive(Debug, Deserialize)]
pub struct SetDomainQuery {
    pub domain_name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingQuery {
    pub key: String,
    pub value: String,
}

/// Fixed acknowledgment body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const SUCCESS: MessageResponse = MessageResponse { message: "success" };
}
