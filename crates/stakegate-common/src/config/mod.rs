//! Configuration types for the stakegate gateway

mod upstream;

pub use upstream::{ConfigServiceConfig, StakingApiConfig};

use {
    serde::{Deserialize, Serialize},
    std::{fs, net::SocketAddr, path::Path},
};

use crate::errors::{Error, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub staking_api: StakingApiConfig,
    pub config_service: ConfigServiceConfig,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl GatewayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Self>(&contents)?)
    }

    /// Builds the configuration from process environment variables.
    ///
    /// `STAKING_API_URL`, `STAKING_API_KEY` and `CONFIG_SERVICE_URL` are
    /// required; everything else falls back to a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("missing environment variable {key}")))
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("invalid BIND_ADDR: {e}")))?;

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("invalid REQUEST_TIMEOUT_SECS: {e}")))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
            staking_api: StakingApiConfig {
                base_url: required("STAKING_API_URL")?,
                api_key: required("STAKING_API_KEY")?,
            },
            config_service: ConfigServiceConfig {
                base_url: required("CONFIG_SERVICE_URL")?,
            },
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
