//! Native staking engine for stakegate
//! Decodes validator keys from calldata, derives lifecycle statuses and
//! computes exact reward figures for dedicated staking deployments.

pub mod codec;
pub mod decoded;
pub mod deployment;
pub mod lifecycle;
pub mod mapping;
pub mod providers;
pub mod rewards;


use thiserror::Error;

pub use codec::{num_validators, split_packed_keys, StakingCall};
pub use decoded::{DataDecoded, DataDecodedParameter};
pub use deployment::{Deployment, DeploymentResolver, ResolvedDeployment};
pub use lifecycle::{DepositStatus, ValidatorsExitStatus};
pub use mapping::{
    DepositRequest, MappingResult, MultisigTransactionInfo, NativeStakingDepositInfo,
    NativeStakingMapper, NativeStakingValidatorsExitInfo, NativeStakingWithdrawInfo,
    ValidatorsRequest,
};
pub use providers::{ChainsRepository, StakingRepository};

/// Errors that can occur while mapping staking operations
#[derive(Error, Debug)]
pub enum StakingError {
    /// Collapses every deployment validation failure; the reason is only logged.
    #[error("Native staking deployment not found")]
    DeploymentNotFound,

    #[error("Malformed validator key data: {0}")]
    MalformedKeyData(String),

    /// Upstream numeric data that cannot be used, e.g. a fee outside [0, 1].
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Caller-supplied amount that is not a non-negative integer.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid staking calldata: {0}")]
    InvalidCalldata(String),

    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StakingError>;
