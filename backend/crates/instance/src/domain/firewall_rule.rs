//! Firewall Rule
//!
//! Transfer object for one instance firewall rule. Field names on the wire
//! are the provider's PascalCase names, both from clients and to the provider.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirewallProtocol {
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
    #[serde(rename = "ICMP")]
    Icmp,
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "ICMPv6")]
    IcmpV6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FirewallAction {
    Accept,
    Drop,
}

/// One firewall rule as accepted on the add and delete routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FirewallRule {
    pub protocol: FirewallProtocol,
    pub port: String,
    pub cidr_block: String,
    pub ipv6_cidr_block: String,
    pub action: FirewallAction,
    pub firewall_rule_description: String,
}

/// Rule entry of a delete call; the provider matches on these fields only
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleSelector<'a> {
    pub protocol: FirewallProtocol,
    pub port: &'a str,
    pub cidr_block: &'a str,
    pub ipv6_cidr_block: &'a str,
    pub action: FirewallAction,
}

impl FirewallRule {
    /// The rule without its description
    pub fn selector(&self) -> RuleSelector<'_> {
        RuleSelector {
            protocol: self.protocol,
            port: &self.port,
            cidr_block: &self.cidr_block,
            ipv6_cidr_block: &self.ipv6_cidr_block,
            action: self.action,
        }
    }
}
