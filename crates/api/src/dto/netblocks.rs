use netblocks_domain::NetblockIpRanges;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct NetblockIpRangesQuery {
    pub range_type: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct NetblockIpRangesResponse {
    pub id: String,
    pub range_type: String,
    pub cidr_blocks: Vec<String>,
    pub cidr_blocks_ipv4: Vec<String>,
    pub cidr_blocks_ipv6: Vec<String>,
}

impl From<NetblockIpRanges> for NetblockIpRangesResponse {
    fn from(ranges: NetblockIpRanges) -> Self {
        Self {
            id: ranges.id,
            range_type: ranges.range_type,
            cidr_blocks: ranges.cidr_blocks,
            cidr_blocks_ipv4: ranges.cidr_blocks_ipv4,
            cidr_blocks_ipv6: ranges.cidr_blocks_ipv6,
        }
    }
}
