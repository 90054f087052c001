use netblocks_application::services::NetblockResolver;
use netblocks_application::use_cases::GetNetblockIpRangesUseCase;
use netblocks_domain::Config;
use netblocks_infrastructure::dns::HttpsTxtFetcher;
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub get_ip_ranges: Arc<GetNetblockIpRangesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let fetcher = Arc::new(HttpsTxtFetcher::from_config(&config.resolver)?);
        debug!(endpoint = fetcher.endpoint(), "TXT record fetcher ready");
        let resolver = Arc::new(NetblockResolver::new(fetcher));

        Ok(Self {
            get_ip_ranges: Arc::new(GetNetblockIpRangesUseCase::new(resolver)),
        })
    }
}
