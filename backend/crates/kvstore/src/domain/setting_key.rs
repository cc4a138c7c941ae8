//! Known Setting Keys
//!
//! The table accepts any key, but the integrations only ever read these.

use std::fmt;

/// A setting read by one of the provider integrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Compute provider API secret id
    TencentSecretId,
    /// Compute provider API secret key
    TencentSecretKey,
    /// DNS provider API token
    CloudflareApi,
    /// Managed second-level domain
    Sld,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::TencentSecretId,
        SettingKey::TencentSecretKey,
        SettingKey::CloudflareApi,
        SettingKey::Sld,
    ];

    /// Column value stored in `kvstore.key`
    pub const fn as_str(&self) -> &'static str {
        match self {
            SettingKey::TencentSecretId => "tencent_secret_id",
            SettingKey::TencentSecretKey => "tencent_secret_key",
            SettingKey::CloudflareApi => "cloudflare_api",
            SettingKey::Sld => "sld",
        }
    }

    /// Client-facing message when the setting is absent
    pub const fn missing_message(&self) -> &'static str {
        match self {
            SettingKey::TencentSecretId | SettingKey::TencentSecretKey => {
                "Tencent credentials not found"
            }
            SettingKey::CloudflareApi => "Cloudflare API not configured.",
            SettingKey::Sld => "Second-level domain not configured.",
        }
    }

    /// Whether the stored value must stay out of logs
    pub const fn is_secret(&self) -> bool {
        !matches!(self, SettingKey::Sld)
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_parse() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SettingKey::parse("unknown"), None);
    }

    #[test]
    fn test_compute_keys_share_message() {
        assert_eq!(
            SettingKey::TencentSecretId.missing_message(),
            SettingKey::TencentSecretKey.missing_message()
        );
    }

    #[test]
    fn test_only_domain_is_loggable() {
        assert!(!SettingKey::Sld.is_secret());
        assert!(SettingKey::CloudflareApi.is_secret());
    }
}
