use healthdata::service::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct Listener {
    pub host: String,
    pub port: u16,
}

impl Default for Listener {
    fn default() -> Self {
        Listener {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

/// Upstream statistics endpoint settings.
#[derive(Deserialize, Debug, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint_url: String,
    /// Bound on the single blocking fetch per pass, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint_url: default_endpoint(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub listener: Listener,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: Config = serde_yaml::from_reader(file)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listener.port == 0 {
            return Err(ConfigError::Invalid("listener port cannot be 0".into()));
        }
        if self.api.endpoint_url.is_empty() {
            return Err(ConfigError::Invalid("endpoint_url cannot be empty".into()));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs cannot be 0".into(),
            ));
        }
        Ok(())
    }
}
