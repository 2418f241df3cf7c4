//! Staking contract calldata
//!
//! Recognises the staking contract entry points by selector and pulls the
//! packed `_publicKeys` argument out of the ABI encoding.

use alloy_sol_types::{sol, SolCall};

use super::{split_key_bytes, PUBLIC_KEY_LENGTH};
use crate::decoded::{DataDecoded, DataDecodedParameter, PUBLIC_KEYS_PARAMETER};
use crate::{Result, StakingError};

sol! {
    function deposit() external payable;
    function requestValidatorsExit(bytes _publicKeys) external;
    function batchWithdrawCLFee(bytes _publicKeys) external;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakingCall {
    Deposit,
    RequestValidatorsExit { public_keys: Vec<String> },
    BatchWithdrawClFee { public_keys: Vec<String> },
}

impl StakingCall {
    /// Decodes full calldata (selector included).
    pub fn decode(calldata: &[u8]) -> Result<Self> {
        let selector: [u8; 4] = calldata
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| StakingError::InvalidCalldata("missing function selector".into()))?;

        if selector == depositCall::SELECTOR {
            Ok(Self::Deposit)
        } else if selector == requestValidatorsExitCall::SELECTOR {
            let call = requestValidatorsExitCall::abi_decode(calldata, true)
                .map_err(|e| StakingError::InvalidCalldata(e.to_string()))?;
            Ok(Self::RequestValidatorsExit {
                public_keys: keys_from_bytes(&call._publicKeys)?,
            })
        } else if selector == batchWithdrawCLFeeCall::SELECTOR {
            let call = batchWithdrawCLFeeCall::abi_decode(calldata, true)
                .map_err(|e| StakingError::InvalidCalldata(e.to_string()))?;
            Ok(Self::BatchWithdrawClFee {
                public_keys: keys_from_bytes(&call._publicKeys)?,
            })
        } else {
            Err(StakingError::InvalidCalldata(format!(
                "unknown selector 0x{}",
                hex::encode(selector)
            )))
        }
    }

    /// Decodes a `0x`-prefixed (or bare) hex calldata string.
    pub fn decode_hex(calldata: &str) -> Result<Self> {
        let bytes = hex::decode(calldata.trim_start_matches("0x"))
            .map_err(|e| StakingError::InvalidCalldata(format!("invalid hex: {e}")))?;
        Self::decode(&bytes)
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::RequestValidatorsExit { .. } => "requestValidatorsExit",
            Self::BatchWithdrawClFee { .. } => "batchWithdrawCLFee",
        }
    }

    pub fn public_keys(&self) -> &[String] {
        match self {
            Self::Deposit => &[],
            Self::RequestValidatorsExit { public_keys } | Self::BatchWithdrawClFee { public_keys } => {
                public_keys
            }
        }
    }

    /// Same shape an upstream decoder would hand to the mapper.
    pub fn to_data_decoded(&self) -> DataDecoded {
        let parameters = match self {
            Self::Deposit => Vec::new(),
            Self::RequestValidatorsExit { public_keys } | Self::BatchWithdrawClFee { public_keys } => {
                let packed: String = public_keys
                    .iter()
                    .map(|key| key.trim_start_matches("0x"))
                    .collect();
                vec![DataDecodedParameter {
                    name: PUBLIC_KEYS_PARAMETER.to_string(),
                    param_type: "bytes".to_string(),
                    value: serde_json::Value::String(format!("0x{packed}")),
                }]
            }
        };

        DataDecoded {
            method: self.method().to_string(),
            parameters: Some(parameters),
        }
    }
}

fn keys_from_bytes(packed: &[u8]) -> Result<Vec<String>> {
    if packed.len() % PUBLIC_KEY_LENGTH != 0 {
        return Err(StakingError::MalformedKeyData(format!(
            "packed key length {} bytes is not a multiple of {}",
            packed.len(),
            PUBLIC_KEY_LENGTH
        )));
    }
    Ok(split_key_bytes(packed))
}
