//! Thin presentation layer over the `healthdata` pipeline: loads the
//! YAML config, builds the shared [`HealthStats`] handle, and serves
//! rows, filter options, and summaries as JSON.

pub mod api;
pub mod config;

use config::Config;
use healthdata::HealthStats;
use std::sync::Arc;
use std::time::Duration;

pub fn run(config: Config) -> Result<(), api::ApiError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        eprintln!("Already inside a tokio runtime, use run_async() directly");
        return Ok(());
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(run_async(config))
}

pub async fn run_async(config: Config) -> Result<(), api::ApiError> {
    let stats = Arc::new(HealthStats::new(
        config.api.endpoint_url,
        Duration::from_secs(config.api.request_timeout_secs),
    ));

    tracing::info!(
        endpoint = stats.endpoint_url(),
        host = %config.listener.host,
        port = config.listener.port,
        "starting healthwatch"
    );

    api::serve(config.listener, stats).await
}
