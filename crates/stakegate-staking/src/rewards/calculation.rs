// crates/stakegate-staking/src/rewards/calculation.rs

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{One, ToPrimitive, Zero};
use std::str::FromStr;

use super::{hundred, wei_per_validator};
use crate::{Result, StakingError};

const MONTHS_PER_YEAR: u32 = 12;

/// Net rates of return, in percent
#[derive(Debug, Clone, PartialEq)]
pub struct NetRates {
    pub annual_nrr: BigDecimal,
    pub monthly_nrr: BigDecimal,
}

/// Operator fee as a fraction of gross yield. A missing fee is zero.
pub fn fee_fraction(product_fee: Option<&str>) -> Result<BigDecimal> {
    let Some(raw) = product_fee else {
        return Ok(BigDecimal::zero());
    };

    let fee = stakegate_common::utils::parse_decimal(raw)
        .map_err(|e| StakingError::Arithmetic(format!("invalid product fee {raw:?}: {e}")))?;

    if fee < BigDecimal::zero() || fee > BigDecimal::one() {
        return Err(StakingError::Arithmetic(format!(
            "product fee {raw:?} outside [0, 1]"
        )));
    }
    Ok(fee)
}

/// `annual = gross * (1 - fee)`, `monthly = annual / 12`
pub fn net_rates(gross_apy: &BigDecimal, fee: &BigDecimal) -> NetRates {
    let annual_nrr = gross_apy.clone() * (BigDecimal::one() - fee.clone());
    let monthly_nrr = annual_nrr.clone() / BigDecimal::from(MONTHS_PER_YEAR);
    NetRates {
        annual_nrr,
        monthly_nrr,
    }
}

/// Parses a caller-supplied, non-negative integer amount of the smallest unit.
pub fn parse_wei(raw: &str) -> Result<BigInt> {
    let value = BigInt::from_str(raw.trim())
        .map_err(|e| StakingError::InvalidAmount(format!("{raw:?}: {e}")))?;
    if value.sign() == Sign::Minus {
        return Err(StakingError::InvalidAmount(format!("{raw:?} is negative")));
    }
    Ok(value)
}

/// Smallest units scaled down to native units of a currency with `decimals`.
pub fn native_value(wei: &BigInt, decimals: u8) -> BigDecimal {
    BigDecimal::new(wei.clone(), i64::from(decimals))
}

/// Whole validators funded by `wei`, 32 native units each.
pub fn num_validators_from_value(wei: &BigInt) -> Result<u64> {
    (wei / wei_per_validator())
        .to_u64()
        .ok_or_else(|| StakingError::Arithmetic(format!("validator count overflow for {wei}")))
}

pub fn value_from_num_validators(num_validators: u64) -> BigInt {
    wei_per_validator() * num_validators
}

fn truncated_share(wei: &BigInt, rate_pct: &BigDecimal, divisor: BigDecimal) -> BigInt {
    let reward = BigDecimal::from(wei.clone()) * rate_pct.clone() / divisor;
    let (truncated, _) = reward.with_scale(0).into_bigint_and_exponent();
    truncated
}

/// `wei * rate / 100`, truncated to whole smallest units.
pub fn expected_reward(wei: &BigInt, rate_pct: &BigDecimal) -> BigInt {
    truncated_share(wei, rate_pct, hundred())
}

/// `wei * annual_rate / 1200` in a single division, so a non-terminating
/// monthly rate never rounds the reward down by a unit.
pub fn expected_monthly_reward(wei: &BigInt, annual_rate_pct: &BigDecimal) -> BigInt {
    truncated_share(wei, annual_rate_pct, hundred() * BigDecimal::from(MONTHS_PER_YEAR))
}

/// Native-unit value of `wei` in fiat at `price`.
pub fn fiat_value(wei: &BigInt, price: &BigDecimal, decimals: u8) -> BigDecimal {
    native_value(wei, decimals) * price.clone()
}
