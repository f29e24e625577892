use crate::errors::{FetchError, Result};
use crate::types::RawRecord;
use std::time::Duration;

/// Bound on the single blocking network call per pass.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the statistics endpoint. One GET per fetch, no
/// retries.
#[derive(Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl StatsClient {
    pub fn new(timeout: Duration) -> Self {
        StatsClient {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Performs the single GET attempt and classifies the outcome:
    /// transport failure or non-2xx status is [`FetchError::Network`],
    /// a non-JSON body is [`FetchError::MalformedResponse`], and JSON
    /// of the wrong shape is [`FetchError::Schema`].
    pub async fn fetch(&self, url: &str) -> Result<Vec<RawRecord>> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP {status} for {url}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Parse in two steps so a non-JSON body and a wrong-shape JSON
        // body are reported as different errors.
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        serde_json::from_value(value).map_err(|e| FetchError::Schema(e.to_string()))
    }
}

impl Default for StatsClient {
    fn default() -> Self {
        StatsClient::new(DEFAULT_TIMEOUT)
    }
}
