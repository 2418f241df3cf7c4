use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::providers::StakeRecord;
use crate::{Result, StakingError};

/// Sums `rewards` across stake records. Order does not matter.
pub fn sum_rewards(stakes: &[StakeRecord]) -> Result<BigDecimal> {
    stakes.iter().try_fold(BigDecimal::zero(), |total, stake| {
        let rewards = stakegate_common::utils::parse_decimal(&stake.rewards).map_err(|e| {
            StakingError::Arithmetic(format!(
                "invalid rewards {:?} for {}: {e}",
                stake.rewards, stake.validator_address
            ))
        })?;
        Ok(total + rewards)
    })
}
