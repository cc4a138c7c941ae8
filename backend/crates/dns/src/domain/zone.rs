//! Zone

use serde::Deserialize;

/// A domain registered in the provider account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// Id of the zone whose name is exactly `domain`
pub fn find_zone_id(zones: &[Zone], domain: &str) -> Option<String> {
    zones
        .iter()
        .find(|zone| zone.name == domain)
        .map(|zone| zone.id.clone())
}
