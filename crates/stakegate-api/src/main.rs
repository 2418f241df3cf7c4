use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use futures::FutureExt;
use stakegate_api::{
    ApiConfig, ApiServer, ConfigServiceClient, HealthCheckResult, HealthStatus, KilnClient,
};
use stakegate_common::GatewayConfig;
use stakegate_staking::NativeStakingMapper;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments for the gateway
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Native staking gateway",
    long_about = "Maps native staking deposits, validator exits and withdrawals into reportable records"
)]
struct Args {
    /// JSON configuration file; environment variables are used when absent
    #[clap(long, env = "STAKEGATE_CONFIG")]
    config: Option<PathBuf>,
}

fn health_result(outcome: std::result::Result<(), String>) -> HealthCheckResult {
    match outcome {
        Ok(()) => HealthCheckResult {
            status: HealthStatus::Healthy,
            details: None,
        },
        Err(details) => HealthCheckResult {
            status: HealthStatus::Unhealthy,
            details: Some(details),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GatewayConfig::from_file(path)?,
        None => GatewayConfig::from_env()?,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let timeout = config.request_timeout();
    let kiln = Arc::new(KilnClient::new(&config.staking_api, timeout)?);
    let chains = Arc::new(ConfigServiceClient::new(&config.config_service, timeout)?);

    let mapper = Arc::new(NativeStakingMapper::new(chains.clone(), kiln.clone()));

    let api_config = ApiConfig {
        bind_addr: config.bind_addr,
        ..ApiConfig::default()
    };
    let server = ApiServer::new(api_config, mapper);

    let health = server.health();
    health
        .register(
            "staking_api",
            Arc::new(move || {
                let kiln = kiln.clone();
                async move { health_result(kiln.check_health().await) }.boxed()
            }),
        )
        .await;
    health
        .register(
            "config_service",
            Arc::new(move || {
                let chains = chains.clone();
                async move { health_result(chains.check_health().await) }.boxed()
            }),
        )
        .await;

    info!("Upstream staking API: {}", config.staking_api.base_url);
    info!("Upstream config service: {}", config.config_service.base_url);

    server.start().await
}
