pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

pub use config::{ConfigServiceConfig, GatewayConfig, StakingApiConfig};
pub use errors::{Error, Result};
pub use types::*;
