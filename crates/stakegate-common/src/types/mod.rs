//! Common data types used throughout the stakegate system

pub mod chain;

pub use chain::{ChainInfo, NativeCurrency, TokenInfo, TokenType};
