//! Netblocks Domain Layer
pub mod cidr_blocks;
pub mod config;
pub mod errors;
pub mod range_type;
pub mod spf;

pub use cidr_blocks::{CidrBlocks, NetblockIpRanges};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use range_type::{RangeSource, RangeType};
pub use spf::SpfToken;
