use async_trait::async_trait;
use netblocks_application::ports::TxtRecordFetcher;
use netblocks_domain::config::ResolverConfig;
use netblocks_domain::{ConfigError, DomainError};
use tracing::{debug, warn};

use super::build_client;

/// Record type requested from the resolve endpoint.
const TXT_RECORD_TYPE: &str = "TXT";

/// Fetches TXT records from a DNS-over-HTTPS JSON resolve endpoint
/// (`<endpoint>?name=<NAME>&type=TXT`).
///
/// The response body is returned as-is. It is never parsed as JSON: the
/// resolver only looks at whitespace-separated tokens inside it.
pub struct HttpsTxtFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpsTxtFetcher {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(build_client(config)?, config.endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TxtRecordFetcher for HttpsTxtFetcher {
    async fn fetch_record(&self, name: &str) -> Result<String, DomainError> {
        debug!(endpoint = %self.endpoint, name, "Requesting TXT record");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", name), ("type", TXT_RECORD_TYPE)])
            .send()
            .await
            .map_err(|e| DomainError::NetworkError {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        // The body is tokenized whatever the status, so a non-2xx answer only
        // gets logged.
        let status = response.status();
        if !status.is_success() {
            warn!(
                endpoint = %self.endpoint,
                name,
                status = status.as_u16(),
                "Resolve endpoint returned a non-success status"
            );
        }

        let body = response.text().await.map_err(|e| DomainError::ReadError {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        debug!(name, body_len = body.len(), "TXT record received");

        Ok(body)
    }
}
