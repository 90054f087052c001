use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the DNS-over-HTTPS endpoint serving TXT records
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// JSON resolve endpoint, queried as `<endpoint>?name=<NAME>&type=TXT`
    /// (default: "https://dns.google.com/resolve")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds. Unset means the HTTP client default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ResolverConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://dns.google.com/resolve".to_string()
}
