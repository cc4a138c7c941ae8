//! Application Layer

pub mod instance_service;

pub use instance_service::{INSTANCE_CACHE_KEY, InstanceCache, InstanceService};
