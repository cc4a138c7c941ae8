//! Application Layer

pub mod dns_service;
pub mod pagination;

pub use dns_service::DnsService;
