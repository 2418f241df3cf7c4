// crates/stakegate-staking/src/mapping/types.rs

use {
    alloy_primitives::Address,
    bigdecimal::BigDecimal,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    stakegate_common::{utils::decimal::plain, TokenInfo},
};

use crate::decoded::DataDecoded;
use crate::lifecycle::{DepositStatus, ValidatorsExitStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub chain_id: String,
    pub to: Address,
    /// Deposited amount in the smallest unit
    pub value: String,
    pub is_confirmed: bool,
    #[serde(default)]
    pub deposit_execution_date: Option<DateTime<Utc>>,
}

/// Multisig metadata of the transaction carrying the call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigTransactionInfo {
    pub confirmations_required: u64,
    pub confirmations_count: u64,
    #[serde(default)]
    pub execution_date: Option<DateTime<Utc>>,
}

/// Input of validator-exit and withdrawal mappings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorsRequest {
    pub chain_id: String,
    pub to: Address,
    pub transaction: MultisigTransactionInfo,
    pub data_decoded: DataDecoded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeStakingDepositInfo {
    pub status: DepositStatus,
    pub estimated_entry_time: u64,
    pub estimated_exit_time: u64,
    pub estimated_withdrawal_time: u64,
    #[serde(serialize_with = "plain::serialize")]
    pub fee: BigDecimal,
    #[serde(serialize_with = "plain::serialize")]
    pub monthly_nrr: BigDecimal,
    #[serde(serialize_with = "plain::serialize")]
    pub annual_nrr: BigDecimal,
    pub value: String,
    pub num_validators: u64,
    pub expected_annual_reward: String,
    pub expected_monthly_reward: String,
    #[serde(serialize_with = "plain::serialize")]
    pub expected_fiat_annual_reward: BigDecimal,
    #[serde(serialize_with = "plain::serialize")]
    pub expected_fiat_monthly_reward: BigDecimal,
    pub token_info: TokenInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeStakingValidatorsExitInfo {
    pub status: ValidatorsExitStatus,
    pub estimated_exit_time: u64,
    pub estimated_withdrawal_time: u64,
    pub value: String,
    pub num_validators: u64,
    #[serde(serialize_with = "plain::serialize")]
    pub rewards: BigDecimal,
    pub validators: Vec<String>,
    pub token_info: TokenInfo,
}

/// Always a settled view; carries no status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeStakingWithdrawInfo {
    pub value: String,
    pub num_validators: u64,
    #[serde(serialize_with = "plain::serialize")]
    pub rewards: BigDecimal,
    pub validators: Vec<String>,
    pub token_info: TokenInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum MappingResult {
    NativeStakingDeposit(NativeStakingDepositInfo),
    NativeStakingValidatorsExit(NativeStakingValidatorsExitInfo),
    NativeStakingWithdraw(NativeStakingWithdrawInfo),
}

impl From<NativeStakingDepositInfo> for MappingResult {
    fn from(info: NativeStakingDepositInfo) -> Self {
        Self::NativeStakingDeposit(info)
    }
}

impl From<NativeStakingValidatorsExitInfo> for MappingResult {
    fn from(info: NativeStakingValidatorsExitInfo) -> Self {
        Self::NativeStakingValidatorsExit(info)
    }
}

impl From<NativeStakingWithdrawInfo> for MappingResult {
    fn from(info: NativeStakingWithdrawInfo) -> Self {
        Self::NativeStakingWithdraw(info)
    }
}
