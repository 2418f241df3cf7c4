//! Staking deployments and their validation

use {
    serde::{Deserialize, Serialize},
    stakegate_common::ChainInfo,
    std::sync::Arc,
    tracing::{debug, warn},
};

use crate::providers::ChainsRepository;
use crate::{Result, StakingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Defi,
    Pooling,
    Dedicated,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Active,
    Paused,
    #[serde(other)]
    Unknown,
}

impl DeploymentStatus {
    pub fn is_recognized(self) -> bool {
        match self {
            Self::Active | Self::Paused => true,
            Self::Unknown => false,
        }
    }
}

/// Chain family a deployment lives on, as named by the staking provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentChain {
    Eth,
    Arb,
    Bsc,
    Matic,
    Op,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub chain: DeploymentChain,
    pub chain_id: u64,
    pub address: String,
    pub product_type: ProductType,
    /// Fraction of gross yield retained by the operator, e.g. `"0.05"`
    #[serde(default)]
    pub product_fee: Option<String>,
    pub status: DeploymentStatus,
}

/// A deployment that passed validation, with its chain
#[derive(Debug, Clone)]
pub struct ResolvedDeployment {
    pub deployment: Deployment,
    pub chain: ChainInfo,
}

/// Validates deployments against the chain registry.
///
/// Every failure, including a registry error, becomes
/// [`StakingError::DeploymentNotFound`] so callers cannot probe product
/// availability. The concrete reason is logged.
pub struct DeploymentResolver {
    chains: Arc<dyn ChainsRepository>,
}

impl DeploymentResolver {
    pub fn new(chains: Arc<dyn ChainsRepository>) -> Self {
        Self { chains }
    }

    pub async fn resolve(&self, chain_id: &str, deployment: Deployment) -> Result<ResolvedDeployment> {
        if deployment.product_type != ProductType::Dedicated {
            debug!(
                "Deployment {} has product type {:?}, expected dedicated",
                deployment.address, deployment.product_type
            );
            return Err(StakingError::DeploymentNotFound);
        }

        if chain_id.trim().is_empty() {
            debug!("Empty chain id for deployment {}", deployment.address);
            return Err(StakingError::DeploymentNotFound);
        }

        let chain = match self.chains.get_chain(chain_id).await {
            Ok(chain) => chain,
            Err(e) => {
                warn!("Failed to resolve chain {}: {}", chain_id, e);
                return Err(StakingError::DeploymentNotFound);
            }
        };

        if deployment.chain == DeploymentChain::Unknown
            || deployment.chain_id.to_string() != chain.chain_id
        {
            debug!(
                "Deployment {} on {:?}/{} does not match chain {}",
                deployment.address, deployment.chain, deployment.chain_id, chain.chain_id
            );
            return Err(StakingError::DeploymentNotFound);
        }

        if !deployment.status.is_recognized() {
            debug!("Deployment {} has unknown status", deployment.address);
            return Err(StakingError::DeploymentNotFound);
        }

        Ok(ResolvedDeployment { deployment, chain })
    }
}
