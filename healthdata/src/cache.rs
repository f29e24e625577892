use crate::client::StatsClient;
use crate::errors::FetchError;
use crate::normalize::normalize;
use crate::types::Dataset;
use moka::future::Cache;
use std::sync::Arc;

/// Process-lifetime memoization of fetched datasets, keyed by endpoint
/// URL. No TTL, no eviction, no manual invalidation: once a fetch
/// succeeds for a URL, every later call for it is served from memory.
///
/// Concurrent first callers for the same URL share a single in-flight
/// fetch. Failures are never cached, so a dataset stored by an earlier
/// successful fetch cannot be displaced by a later failed attempt.
pub struct DatasetCache {
    cache: Cache<String, Arc<Dataset>>,
    client: StatsClient,
}

impl DatasetCache {
    pub fn new(client: StatsClient) -> Self {
        DatasetCache {
            cache: Cache::builder().build(),
            client,
        }
    }

    /// Returns the cached dataset for `url`, fetching and normalizing
    /// it on first use. At most one network call per distinct URL per
    /// process lifetime on the happy path.
    pub async fn get_or_fetch(&self, url: &str) -> Result<Arc<Dataset>, Arc<FetchError>> {
        self.cache
            .try_get_with(url.to_string(), async {
                let records = self.client.fetch(url).await?;
                let dataset = normalize(records)?;
                tracing::info!(url, rows = dataset.len(), "dataset loaded");
                Ok(Arc::new(dataset))
            })
            .await
    }
}
