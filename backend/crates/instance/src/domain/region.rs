//! Region Set
//!
//! The instance listing scans exactly these regions, in this order.

/// A compute provider region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Provider region identifier, sent as `X-TC-Region`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
}

pub const REGIONS: [Region; 10] = [
    Region { id: "ap-singapore", name: "新加坡" },
    Region { id: "ap-guangzhou", name: "广州" },
    Region { id: "ap-shanghai", name: "上海" },
    Region { id: "ap-beijing", name: "北京" },
    Region { id: "ap-chengdu", name: "成都" },
    Region { id: "ap-seoul", name: "首尔" },
    Region { id: "eu-frankfurt", name: "法兰克福" },
    Region { id: "na-siliconvalley", name: "硅谷" },
    Region { id: "ap-bangkok", name: "曼谷" },
    Region { id: "ap-tokyo", name: "东京" },
];
