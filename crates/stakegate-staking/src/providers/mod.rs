//! Read-only collaborators consumed by the staking engine.
//! Both are injected into [`crate::NativeStakingMapper`]; their retry and
//! timeout policies are their own.

mod types;

pub use types::{DedicatedStakingStats, GrossApy, NetworkStats, StakeRecord};

use {
    alloy_primitives::Address,
    anyhow::Result,
    async_trait::async_trait,
    stakegate_common::ChainInfo,
};

use crate::deployment::Deployment;

/// Chain registry lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainsRepository: Send + Sync {
    async fn get_chain(&self, chain_id: &str) -> Result<ChainInfo>;
}

/// Staking statistics provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StakingRepository: Send + Sync {
    async fn get_deployment(&self, chain_id: &str, address: &Address) -> Result<Deployment>;

    async fn get_dedicated_staking_stats(&self, chain_id: &str) -> Result<DedicatedStakingStats>;

    async fn get_network_stats(&self, chain_id: &str) -> Result<NetworkStats>;

    /// `validators_public_keys` is a comma-joined list of `0x` keys.
    async fn get_stakes(
        &self,
        chain_id: &str,
        validators_public_keys: &str,
    ) -> Result<Vec<StakeRecord>>;
}
