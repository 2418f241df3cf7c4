//! Chain registry types
//!
//! These mirror what the chain registry reports about a chain and the token
//! descriptor the gateway attaches to every staking result.

use serde::{Deserialize, Serialize};

/// Address used for the native currency in token descriptors
pub const NATIVE_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default)]
    pub logo_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: String,
    #[serde(default)]
    pub chain_name: String,
    pub native_currency: NativeCurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    NativeToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: String,
    pub decimals: u8,
    pub logo_uri: Option<String>,
    pub name: String,
    pub symbol: String,
    pub trusted: bool,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl TokenInfo {
    /// Native currency descriptor for `chain`; always trusted.
    pub fn native(chain: &ChainInfo) -> Self {
        let currency = &chain.native_currency;
        Self {
            address: NATIVE_TOKEN_ADDRESS.to_string(),
            decimals: currency.decimals,
            logo_uri: currency.logo_uri.clone(),
            name: currency.name.clone(),
            symbol: currency.symbol.clone(),
            trusted: true,
            token_type: TokenType::NativeToken,
        }
    }
}
