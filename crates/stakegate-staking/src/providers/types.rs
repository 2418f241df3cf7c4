// crates/stakegate-staking/src/providers/types.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use stakegate_common::utils::decimal::{flexible, plain};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    #[serde(deserialize_with = "flexible::deserialize", serialize_with = "plain::serialize")]
    pub eth_price_usd: BigDecimal,
    pub estimated_entry_time_seconds: u64,
    pub estimated_exit_time_seconds: u64,
    pub estimated_withdrawal_time_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossApy {
    #[serde(deserialize_with = "flexible::deserialize", serialize_with = "plain::serialize")]
    pub last_30d: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedicatedStakingStats {
    pub gross_apy: GrossApy,
}

/// One validator position; `rewards` is in native units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRecord {
    pub validator_address: String,
    #[serde(default)]
    pub state: Option<String>,
    pub rewards: String,
}
