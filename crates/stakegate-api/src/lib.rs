// src/lib.rs

//! stakegate-api - HTTP gateway for native staking mappings
//!
//! Exposes deposit, validator-exit and withdrawal mapping over HTTP and wires
//! the staking engine to its upstream collaborators.

pub mod clients;
pub mod health;
pub mod rest;
pub mod staking_endpoints;
pub mod types;

// Re-exports
pub use clients::{ConfigServiceClient, KilnClient};
pub use health::HealthService;
pub use rest::{ApiConfig, ApiServer, AppState};
pub use types::{ApiError, ApiResponse, HealthCheckResult, HealthResponse, HealthStatus, StatusResponse};
