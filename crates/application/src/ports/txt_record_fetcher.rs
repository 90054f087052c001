use async_trait::async_trait;
use netblocks_domain::DomainError;

/// Application-layer port for fetching raw TXT record text.
///
/// One call is one upstream request. Implementations return the response body
/// untouched; tokenizing is left to the caller.
#[async_trait]
pub trait TxtRecordFetcher: Send + Sync {
    /// Fetch the TXT record for `name`.
    ///
    /// Fails with `DomainError::NetworkError` when the request cannot be
    /// completed and `DomainError::ReadError` when the body cannot be read.
    async fn fetch_record(&self, name: &str) -> Result<String, DomainError>;
}
