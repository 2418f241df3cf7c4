use serde::{Deserialize, Serialize};

/// Staking statistics provider (deployments, network stats, stakes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingApiConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Chain registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigServiceConfig {
    pub base_url: String,
}
