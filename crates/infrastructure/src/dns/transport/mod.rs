pub mod https;

use netblocks_domain::config::ResolverConfig;
use netblocks_domain::ConfigError;

/// Builds the HTTP client used for TXT lookups.
///
/// No timeout is set unless the config asks for one; the client default then
/// applies.
pub fn build_client(config: &ResolverConfig) -> Result<reqwest::Client, ConfigError> {
    let mut builder = reqwest::Client::builder().use_rustls_tls();

    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}
