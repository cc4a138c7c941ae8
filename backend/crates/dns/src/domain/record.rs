//! DNS Records

use serde::{Deserialize, Serialize};

/// Automatic TTL
pub const AUTO_TTL: u32 = 1;

/// A record as returned to clients
///
/// Decoded from the provider's record objects; fields not listed here are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default)]
    pub proxied: bool,
}

/// Body of an A record creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ARecordRequest {
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl ARecordRequest {
    /// Unproxied, auto-TTL A record `prefix.domain -> address`
    pub fn new(prefix: &str, domain: &str, address: impl Into<String>) -> Self {
        Self {
            record_type: "A",
            name: format!("{prefix}.{domain}"),
            content: address.into(),
            ttl: AUTO_TTL,
            proxied: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_a_record_body() {
        let body = serde_json::to_value(ARecordRequest::new("www", "example.com", "1.2.3.4"))
            .unwrap();
        assert_eq!(
            body,
            json!({
                "type": "A",
                "name": "www.example.com",
                "content": "1.2.3.4",
                "ttl": 1,
                "proxied": false
            })
        );
    }

    #[test]
    fn test_record_decoding_ignores_extra_fields() {
        let record: DomainRecord = serde_json::from_value(json!({
            "id": "rec1",
            "name": "www.example.com",
            "type": "A",
            "content": "1.2.3.4",
            "proxied": true,
            "ttl": 1,
            "zone_id": "z1"
        }))
        .unwrap();
        assert_eq!(record.record_type, "A");
        assert!(record.proxied);
    }

    #[test]
    fn test_missing_proxied_is_false() {
        let record: DomainRecord = serde_json::from_value(json!({
            "id": "rec2",
            "name": "example.com",
            "type": "TXT",
            "content": "v=spf1 -all"
        }))
        .unwrap();
        assert!(!record.proxied);
    }
}
