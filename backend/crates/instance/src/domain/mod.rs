//! Domain Layer

pub mod firewall_rule;
pub mod provider;
pub mod region;

pub use firewall_rule::{FirewallAction, FirewallProtocol, FirewallRule};
pub use provider::{InstancePage, LighthouseApi};
pub use region::{REGIONS, Region};
