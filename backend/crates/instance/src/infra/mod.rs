//! Infrastructure Layer

pub mod signer;
pub mod tencent;

pub use tencent::TencentLighthouseClient;
