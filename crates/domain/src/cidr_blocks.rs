use serde::Serialize;

/// Netblocks collected during a lookup, kept in discovery order.
///
/// Every entry lands in exactly one of `ipv4`/`ipv6` and also in `all`.
/// Repeats are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CidrBlocks {
    pub all: Vec<String>,
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

impl CidrBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an IPv4-only set where `all` mirrors `ipv4`.
    pub fn from_ipv4(blocks: &[&str]) -> Self {
        let ipv4: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
        Self {
            all: ipv4.clone(),
            ipv4,
            ipv6: Vec::new(),
        }
    }

    pub fn push_ipv4(&mut self, cidr: &str) {
        self.ipv4.push(cidr.to_string());
        self.all.push(cidr.to_string());
    }

    pub fn push_ipv6(&mut self, cidr: &str) {
        self.ipv6.push(cidr.to_string());
        self.all.push(cidr.to_string());
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// The read-only data-source document produced for one range type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetblockIpRanges {
    pub id: String,
    pub range_type: String,
    pub cidr_blocks: Vec<String>,
    pub cidr_blocks_ipv4: Vec<String>,
    pub cidr_blocks_ipv6: Vec<String>,
}

impl NetblockIpRanges {
    pub const ID_PREFIX: &'static str = "netblock-ip-ranges-";

    pub fn new(range_type: &str, blocks: CidrBlocks) -> Self {
        Self {
            id: format!("{}{}", Self::ID_PREFIX, range_type),
            range_type: range_type.to_string(),
            cidr_blocks: blocks.all,
            cidr_blocks_ipv4: blocks.ipv4,
            cidr_blocks_ipv6: blocks.ipv6,
        }
    }
}
