use crate::cache::DatasetCache;
use crate::client::StatsClient;
use crate::errors::FetchError;
use crate::types::Dataset;
use std::sync::Arc;
use std::time::Duration;

/// Public endpoint the dashboard variants all pointed at.
pub const DEFAULT_ENDPOINT: &str = "https://disease.sh/v3/covid-19/countries";

/// Composition root handed to the presentation layer: one client, one
/// cache, one endpoint URL, constructed once and shared. Keeps the
/// cache an explicit injected object rather than ambient global state.
pub struct HealthStats {
    cache: DatasetCache,
    endpoint_url: String,
}

impl HealthStats {
    pub fn new(endpoint_url: impl Into<String>, timeout: Duration) -> Self {
        HealthStats {
            cache: DatasetCache::new(StatsClient::new(timeout)),
            endpoint_url: endpoint_url.into(),
        }
    }

    /// The memoized dataset for the configured endpoint. One fetch +
    /// normalize pass per process lifetime on the happy path; a
    /// failure surfaces here and leaves nothing cached.
    pub async fn dataset(&self) -> Result<Arc<Dataset>, Arc<FetchError>> {
        self.cache.get_or_fetch(&self.endpoint_url).await
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}
