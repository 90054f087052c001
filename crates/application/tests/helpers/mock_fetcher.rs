use async_trait::async_trait;
use netblocks_application::ports::TxtRecordFetcher;
use netblocks_domain::DomainError;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock TxtRecordFetcher
// ============================================================================

#[derive(Clone, Default)]
pub struct MockTxtRecordFetcher {
    records: Arc<RwLock<HashMap<String, String>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    fetched: Arc<RwLock<Vec<String>>>,
}

impl MockTxtRecordFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<(&str, &str)>) -> Self {
        let fetcher = Self::new();
        fetcher.set_records(records).await;
        fetcher
    }

    pub async fn set_record(&self, name: &str, body: &str) {
        self.records
            .write()
            .await
            .insert(name.to_string(), body.to_string());
    }

    pub async fn set_records(&self, records: Vec<(&str, &str)>) {
        let mut map = self.records.write().await;
        for (name, body) in records {
            map.insert(name.to_string(), body.to_string());
        }
    }

    /// Makes every fetch of `name` fail with a network error.
    pub async fn fail_on(&self, name: &str) {
        self.failing.write().await.insert(name.to_string());
    }

    /// Names fetched so far, in request order.
    pub async fn fetched(&self) -> Vec<String> {
        self.fetched.read().await.clone()
    }
}

#[async_trait]
impl TxtRecordFetcher for MockTxtRecordFetcher {
    async fn fetch_record(&self, name: &str) -> Result<String, DomainError> {
        self.fetched.write().await.push(name.to_string());

        if self.failing.read().await.contains(name) {
            return Err(DomainError::NetworkError {
                name: name.to_string(),
                reason: "mock connection refused".to_string(),
            });
        }

        // Unknown names behave like an empty answer.
        Ok(self
            .records
            .read()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default())
    }
}
