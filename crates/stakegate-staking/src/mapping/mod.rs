//! Native staking mapping entry points
//!
//! [`NativeStakingMapper`] turns a deposit, validator-exit or withdrawal call
//! into a reportable record. It resolves the target deployment, decodes
//! validator keys, runs the reward math and derives the lifecycle status.

mod types;

pub use types::{
    DepositRequest, MappingResult, MultisigTransactionInfo, NativeStakingDepositInfo,
    NativeStakingValidatorsExitInfo, NativeStakingWithdrawInfo, ValidatorsRequest,
};

use {
    alloy_primitives::Address,
    chrono::{DateTime, Utc},
    stakegate_common::{utils::seconds_to_millis, TokenInfo},
    std::sync::Arc,
    tracing::{debug, warn},
};

use crate::codec::split_packed_keys;
use crate::decoded::{DataDecoded, PUBLIC_KEYS_PARAMETER};
use crate::deployment::{DeploymentResolver, ResolvedDeployment};
use crate::lifecycle::{deposit_status, validators_exit_status};
use crate::providers::{ChainsRepository, StakeRecord, StakingRepository};
use crate::rewards::{self, NetRates};
use crate::{Result, StakingError};

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct NativeStakingMapper {
    resolver: DeploymentResolver,
    staking: Arc<dyn StakingRepository>,
    clock: Clock,
}

impl NativeStakingMapper {
    pub fn new(chains: Arc<dyn ChainsRepository>, staking: Arc<dyn StakingRepository>) -> Self {
        Self {
            resolver: DeploymentResolver::new(chains),
            staking,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the wall clock used for status derivation.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    async fn resolve_deployment(&self, chain_id: &str, to: &Address) -> Result<ResolvedDeployment> {
        let deployment = match self.staking.get_deployment(chain_id, to).await {
            Ok(deployment) => deployment,
            Err(e) => {
                warn!("Failed to fetch deployment {} on chain {}: {}", to, chain_id, e);
                return Err(StakingError::DeploymentNotFound);
            }
        };
        self.resolver.resolve(chain_id, deployment).await
    }

    async fn fetch_stakes(&self, chain_id: &str, validators: &[String]) -> Result<Vec<StakeRecord>> {
        if validators.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.staking.get_stakes(chain_id, &validators.join(",")).await?)
    }

    pub async fn map_deposit_info(&self, request: &DepositRequest) -> Result<NativeStakingDepositInfo> {
        let resolved = self.resolve_deployment(&request.chain_id, &request.to).await?;

        let dedicated_stats = self.staking.get_dedicated_staking_stats(&request.chain_id).await?;
        let network_stats = self.staking.get_network_stats(&request.chain_id).await?;

        let fee = rewards::fee_fraction(resolved.deployment.product_fee.as_deref())?;
        let NetRates {
            annual_nrr,
            monthly_nrr,
        } = rewards::net_rates(&dedicated_stats.gross_apy.last_30d, &fee);

        let value = rewards::parse_wei(&request.value)?;
        let decimals = resolved.chain.native_currency.decimals;
        let num_validators = rewards::num_validators_from_value(&value)?;
        let expected_annual_reward = rewards::expected_reward(&value, &annual_nrr);
        let expected_monthly_reward = rewards::expected_monthly_reward(&value, &annual_nrr);

        let status = deposit_status(
            request.is_confirmed,
            request.deposit_execution_date,
            network_stats.estimated_entry_time_seconds,
            (self.clock)(),
        );

        debug!(
            "Mapped deposit to {} on chain {}: {:?}, {} validators",
            request.to, request.chain_id, status, num_validators
        );

        Ok(NativeStakingDepositInfo {
            status,
            estimated_entry_time: seconds_to_millis(network_stats.estimated_entry_time_seconds),
            estimated_exit_time: seconds_to_millis(network_stats.estimated_exit_time_seconds),
            estimated_withdrawal_time: seconds_to_millis(
                network_stats.estimated_withdrawal_time_seconds,
            ),
            fee,
            monthly_nrr,
            annual_nrr,
            value: request.value.clone(),
            num_validators,
            expected_fiat_annual_reward: rewards::fiat_value(
                &expected_annual_reward,
                &network_stats.eth_price_usd,
                decimals,
            ),
            expected_fiat_monthly_reward: rewards::fiat_value(
                &expected_monthly_reward,
                &network_stats.eth_price_usd,
                decimals,
            ),
            expected_annual_reward: expected_annual_reward.to_string(),
            expected_monthly_reward: expected_monthly_reward.to_string(),
            token_info: TokenInfo::native(&resolved.chain),
        })
    }

    pub async fn map_validators_exit_info(
        &self,
        request: &ValidatorsRequest,
    ) -> Result<NativeStakingValidatorsExitInfo> {
        let resolved = self.resolve_deployment(&request.chain_id, &request.to).await?;
        let network_stats = self.staking.get_network_stats(&request.chain_id).await?;

        let validators = validators_from(&request.data_decoded)?;
        let num_validators = validators.len() as u64;
        let stakes = self.fetch_stakes(&request.chain_id, &validators).await?;

        let transaction = &request.transaction;
        let status = validators_exit_status(
            transaction.confirmations_count,
            transaction.confirmations_required,
            transaction.execution_date,
            network_stats.estimated_exit_time_seconds,
            (self.clock)(),
        );

        debug!(
            "Mapped validators exit to {} on chain {}: {:?}, {} validators",
            request.to, request.chain_id, status, num_validators
        );

        Ok(NativeStakingValidatorsExitInfo {
            status,
            estimated_exit_time: seconds_to_millis(network_stats.estimated_exit_time_seconds),
            estimated_withdrawal_time: seconds_to_millis(
                network_stats.estimated_withdrawal_time_seconds,
            ),
            value: rewards::value_from_num_validators(num_validators).to_string(),
            num_validators,
            rewards: rewards::sum_rewards(&stakes)?,
            validators,
            token_info: TokenInfo::native(&resolved.chain),
        })
    }

    pub async fn map_withdraw_info(&self, request: &ValidatorsRequest) -> Result<NativeStakingWithdrawInfo> {
        let resolved = self.resolve_deployment(&request.chain_id, &request.to).await?;

        let validators = validators_from(&request.data_decoded)?;
        let num_validators = validators.len() as u64;
        let stakes = self.fetch_stakes(&request.chain_id, &validators).await?;

        debug!(
            "Mapped withdrawal to {} on chain {}: {} validators",
            request.to, request.chain_id, num_validators
        );

        Ok(NativeStakingWithdrawInfo {
            value: rewards::value_from_num_validators(num_validators).to_string(),
            num_validators,
            rewards: rewards::sum_rewards(&stakes)?,
            validators,
            token_info: TokenInfo::native(&resolved.chain),
        })
    }
}

fn validators_from(data_decoded: &DataDecoded) -> Result<Vec<String>> {
    let packed = data_decoded.public_keys().ok_or_else(|| {
        StakingError::MalformedKeyData(format!(
            "{} has no {} parameter",
            data_decoded.method, PUBLIC_KEYS_PARAMETER
        ))
    })?;
    split_packed_keys(packed)
}
