pub mod netblocks;

pub use netblocks::{NetblockIpRangesQuery, NetblockIpRangesResponse};
