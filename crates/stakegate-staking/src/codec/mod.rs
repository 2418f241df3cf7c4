//! Validator public key codec
//!
//! Calls that address several validators carry their BLS public keys packed
//! back to back in a single `bytes` argument. Every key is exactly
//! [`PUBLIC_KEY_LENGTH`] bytes, so a packed value whose length is not an exact
//! multiple of that width is rejected instead of truncated.

mod calldata;

pub use calldata::StakingCall;

use crate::{Result, StakingError};

/// Width of a validator public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 48;
/// Width of a validator public key in hex digits
pub const PUBLIC_KEY_HEX_LENGTH: usize = PUBLIC_KEY_LENGTH * 2;

fn strip_hex_prefix(packed: &str) -> &str {
    packed
        .strip_prefix("0x")
        .or_else(|| packed.strip_prefix("0X"))
        .unwrap_or(packed)
}

fn check_packed_length(digits: &str) -> Result<usize> {
    if digits.len() % PUBLIC_KEY_HEX_LENGTH != 0 {
        return Err(StakingError::MalformedKeyData(format!(
            "packed key length {} is not a multiple of {}",
            digits.len(),
            PUBLIC_KEY_HEX_LENGTH
        )));
    }
    Ok(digits.len() / PUBLIC_KEY_HEX_LENGTH)
}

/// Number of validator keys in `packed`, with or without a `0x` prefix.
pub fn num_validators(packed: &str) -> Result<usize> {
    check_packed_length(strip_hex_prefix(packed))
}

/// Splits `packed` into `0x`-prefixed lowercase keys, preserving calldata order.
pub fn split_packed_keys(packed: &str) -> Result<Vec<String>> {
    let digits = strip_hex_prefix(packed);
    check_packed_length(digits)?;

    let bytes = hex::decode(digits)
        .map_err(|e| StakingError::MalformedKeyData(format!("invalid hex: {e}")))?;

    Ok(split_key_bytes(&bytes))
}

pub(crate) fn split_key_bytes(bytes: &[u8]) -> Vec<String> {
    bytes
        .chunks_exact(PUBLIC_KEY_LENGTH)
        .map(|key| format!("0x{}", hex::encode(key)))
        .collect()
}
