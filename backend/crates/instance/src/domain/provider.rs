//! Provider Trait
//!
//! The subset of the Lighthouse API this service calls. Implemented over
//! HTTP in the infrastructure layer.

use kvstore::TencentCredentials;
use serde_json::Value;

use crate::domain::firewall_rule::FirewallRule;
use crate::error::InstanceResult;

/// One page of a region's instance listing
#[derive(Debug, Clone, Default)]
pub struct InstancePage {
    /// Instances in the region, across all pages
    pub total_count: u64,
    /// Raw instance records, passed through unchanged
    pub instances: Vec<Value>,
}

#[trait_variant::make(LighthouseApi: Send)]
pub trait LocalLighthouseApi {
    /// `DescribeInstances` for one region
    async fn describe_instances(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        offset: u64,
        limit: u64,
    ) -> InstanceResult<InstancePage>;

    /// `DescribeFirewallRules`; returns the provider's rule set verbatim
    async fn describe_firewall_rules(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        instance_id: &str,
    ) -> InstanceResult<Value>;

    /// `CreateFirewallRules`; returns the whole response object
    async fn create_firewall_rules(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        instance_id: &str,
        rules: &[FirewallRule],
    ) -> InstanceResult<Value>;

    /// `DeleteFirewallRules`; returns the whole response object
    async fn delete_firewall_rules(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        instance_id: &str,
        rules: &[FirewallRule],
    ) -> InstanceResult<Value>;
}
