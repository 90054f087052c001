use netblocks_domain::{CidrBlocks, DomainError, NetblockIpRanges, RangeSource, RangeType};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::NetblockResolver;

/// Use case for the netblock data source.
///
/// Maps a range type onto either a DNS-backed resolution or one of the static
/// tables, and wraps the result in a [`NetblockIpRanges`] document.
pub struct GetNetblockIpRangesUseCase {
    resolver: Arc<NetblockResolver>,
}

impl GetNetblockIpRangesUseCase {
    pub fn new(resolver: Arc<NetblockResolver>) -> Self {
        Self { resolver }
    }

    /// Looks up a range type by name, defaulting to `cloud-netblocks`.
    ///
    /// # Returns
    ///
    /// * `Ok(NetblockIpRanges)` - The netblocks and the data-source id
    /// * `Err(DomainError::UnknownRangeType)` - If the name is not recognised
    /// * `Err(DomainError)` - If any upstream fetch fails
    #[instrument(skip(self))]
    pub async fn execute(&self, range_type: Option<&str>) -> Result<NetblockIpRanges, DomainError> {
        let range_type = match range_type {
            Some(name) => name.parse::<RangeType>()?,
            None => RangeType::default(),
        };

        let blocks = self.lookup(range_type).await?;

        info!(
            range_type = %range_type,
            ipv4 = blocks.ipv4.len(),
            ipv6 = blocks.ipv6.len(),
            "Netblock ranges resolved"
        );

        Ok(NetblockIpRanges::new(range_type.as_str(), blocks))
    }

    pub async fn lookup(&self, range_type: RangeType) -> Result<CidrBlocks, DomainError> {
        match range_type.source() {
            RangeSource::Dns(name) => self.resolver.resolve(name).await,
            RangeSource::Static(blocks) => Ok(CidrBlocks::from_ipv4(blocks)),
        }
    }
}
