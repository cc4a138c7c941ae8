//! Request DTOs

use serde::Deserialize;
use serde::de::{self, Deserializer, Unexpected};

/// Query of `GET /info/all`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Bypass the cached list
    #[serde(default, deserialize_with = "query_flag")]
    pub refresh: bool,
}

/// Query of the firewall rule routes
#[derive(Debug, Deserialize)]
pub struct InstanceQuery {
    pub instance_id: String,
    pub region: String,
}

/// Boolean query value in any case: `1`/`0`, `true`/`false`, `t`/`f`,
/// `yes`/`no`, `y`/`n` or `on`/`off`
fn query_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        _ => Err(de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean flag")),
    }
}
