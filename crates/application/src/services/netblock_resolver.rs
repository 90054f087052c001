use netblocks_domain::{spf, CidrBlocks, DomainError, SpfToken};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::TxtRecordFetcher;

/// Expands an SPF-style netblock directory into a flat set of CIDR blocks.
///
/// The seed record is only an index: its `include:` targets are queued and its
/// own `ip4:`/`ip6:` tokens are ignored. Every queued record is then fetched in
/// insertion order (breadth-first), its netblocks appended and its own
/// `include:` targets queued behind the rest.
///
/// There is no visited set or depth limit. A record graph with an include
/// cycle never terminates.
pub struct NetblockResolver {
    fetcher: Arc<dyn TxtRecordFetcher>,
}

impl NetblockResolver {
    pub fn new(fetcher: Arc<dyn TxtRecordFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolves `seed` into its netblocks. The first fetch error aborts the
    /// whole resolution and nothing collected so far is returned.
    #[instrument(skip(self))]
    pub async fn resolve(&self, seed: &str) -> Result<CidrBlocks, DomainError> {
        let record = self.fetcher.fetch_record(seed).await?;

        let mut queue: VecDeque<String> = spf::tokenize(&record)
            .filter_map(|token| match token {
                SpfToken::Include(name) => Some(name.to_string()),
                _ => None,
            })
            .collect();

        debug!(seed, includes = queue.len(), "Seed record fetched");

        let mut blocks = CidrBlocks::new();

        while let Some(name) = queue.pop_front() {
            let record = self.fetcher.fetch_record(&name).await?;

            for token in spf::tokenize(&record) {
                match token {
                    SpfToken::Ip4(cidr) => blocks.push_ipv4(cidr),
                    SpfToken::Ip6(cidr) => blocks.push_ipv6(cidr),
                    SpfToken::Include(next) => queue.push_back(next.to_string()),
                    SpfToken::Other(_) => {}
                }
            }

            debug!(
                name = %name,
                pending = queue.len(),
                collected = blocks.len(),
                "Netblock record expanded"
            );
        }

        Ok(blocks)
    }
}
