//! Exact reward arithmetic for dedicated staking
//!
//! Wei amounts are integers ([`BigInt`]); rates, prices and native-unit
//! amounts are arbitrary-precision decimals ([`BigDecimal`]). Nothing here
//! goes through binary floating point.

mod accrued;
mod calculation;

pub use accrued::sum_rewards;
pub use calculation::{
    expected_monthly_reward, expected_reward, fee_fraction, fiat_value, native_value, net_rates, num_validators_from_value,
    parse_wei, value_from_num_validators, NetRates,
};

use {bigdecimal::BigDecimal, num_bigint::BigInt};

/// Decimals of the staked currency's smallest unit
pub const NATIVE_DECIMALS: u32 = 18;
/// Native units required per dedicated validator
pub const ETH_PER_VALIDATOR: u64 = 32;

pub(crate) fn wei_per_eth() -> BigInt {
    BigInt::from(10u8).pow(NATIVE_DECIMALS)
}

pub(crate) fn wei_per_validator() -> BigInt {
    wei_per_eth() * ETH_PER_VALIDATOR
}

pub(crate) fn hundred() -> BigDecimal {
    BigDecimal::from(100)
}
