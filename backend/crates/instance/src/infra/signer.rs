//! TC3-HMAC-SHA256 Request Signing
//!
//! Signs a JSON `POST /` request to a Tencent Cloud API. Signed headers are
//! fixed to `content-type`, `host` and `x-tc-action`.

use chrono::{DateTime, Utc};
use kvstore::TencentCredentials;
use platform::crypto::{hmac_sha256, sha256_hex};

pub const ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";
const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";

/// What a signature covers
#[derive(Debug, Clone, Copy)]
pub struct SigningInput<'a> {
    pub host: &'a str,
    pub service: &'a str,
    pub action: &'a str,
    pub payload: &'a str,
    pub timestamp: DateTime<Utc>,
}

impl SigningInput<'_> {
    /// `YYYY-MM-DD` of the timestamp, in UTC
    fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    fn credential_scope(&self) -> String {
        format!("{}/{}/tc3_request", self.date(), self.service)
    }

    pub fn canonical_request(&self) -> String {
        let canonical_headers = format!(
            "content-type:{CONTENT_TYPE}\nhost:{}\nx-tc-action:{}\n",
            self.host,
            self.action.to_lowercase()
        );
        format!(
            "POST\n/\n\n{canonical_headers}\n{SIGNED_HEADERS}\n{}",
            sha256_hex(self.payload.as_bytes())
        )
    }

    pub fn string_to_sign(&self) -> String {
        format!(
            "{ALGORITHM}\n{}\n{}\n{}",
            self.timestamp.timestamp(),
            self.credential_scope(),
            sha256_hex(self.canonical_request().as_bytes())
        )
    }

    /// Hex signature under the derived date/service signing key
    pub fn signature(&self, secret_key: &str) -> String {
        let secret_date = hmac_sha256(
            format!("TC3{secret_key}").as_bytes(),
            self.date().as_bytes(),
        );
        let secret_service = hmac_sha256(&secret_date, self.service.as_bytes());
        let secret_signing = hmac_sha256(&secret_service, b"tc3_request");
        hex::encode(hmac_sha256(&secret_signing, self.string_to_sign().as_bytes()))
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self, credentials: &TencentCredentials) -> String {
        format!(
            "{ALGORITHM} Credential={}/{}, SignedHeaders={SIGNED_HEADERS}, Signature={}",
            credentials.secret_id,
            self.credential_scope(),
            self.signature(&credentials.secret_key)
        )
    }
}
