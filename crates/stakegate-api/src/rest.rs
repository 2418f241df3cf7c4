use axum::{
    extract::State,
    http::{header, Method},
    routing::get,
    Router,
};
use stakegate_staking::NativeStakingMapper;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::health::HealthService;
use crate::staking_endpoints::create_staking_router;
use crate::types::{ApiResponse, HealthResponse, StatusResponse};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Health check service
    pub health: Arc<HealthService>,
    /// Native staking mapper
    pub mapper: Arc<NativeStakingMapper>,
    /// Application start time
    pub start_time: Instant,
    /// Service name
    pub service_name: String,
    /// Service version
    pub version: String,
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server bind address
    pub bind_addr: std::net::SocketAddr,
    /// Service name
    pub service_name: String,
    /// Service version
    pub version: String,
    /// Prefix for the staking routes
    pub path_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::net::SocketAddr::from(([0, 0, 0, 0], 3001)),
            service_name: "stakegate-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            path_prefix: "/v1".to_string(),
        }
    }
}

/// API server
pub struct ApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Application state
    state: AppState,
}

impl ApiServer {
    /// Create a new API server around a mapper
    pub fn new(config: ApiConfig, mapper: Arc<NativeStakingMapper>) -> Self {
        let state = AppState {
            health: Arc::new(HealthService::new()),
            mapper,
            start_time: Instant::now(),
            service_name: config.service_name.clone(),
            version: config.version.clone(),
        };

        Self { config, state }
    }

    /// Get a reference to the health service
    pub fn health(&self) -> Arc<HealthService> {
        self.state.health.clone()
    }

    /// Start the API server
    pub async fn start(&self) -> anyhow::Result<()> {
        tracing::info!(
            "Starting {} API server on {}",
            self.config.service_name,
            self.config.bind_addr
        );

        let router = self.router();

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("Listening on {}", self.config.bind_addr);

        axum::serve(listener, router).await?;

        Ok(())
    }

    /// Create the API router
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);

        Router::new()
            .route("/health", get(health_handler))
            .route("/status", get(status_handler))
            .nest(&self.config.path_prefix, create_staking_router())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }
}

/// Health check handler
async fn health_handler(State(state): State<AppState>) -> axum::Json<HealthResponse> {
    let response = state.health.check_all().await;
    axum::Json(response)
}

/// Status handler
async fn status_handler(State(state): State<AppState>) -> axum::Json<ApiResponse<StatusResponse>> {
    let status = StatusResponse {
        name: state.service_name.clone(),
        version: state.version.clone(),
        uptime: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    axum::Json(ApiResponse::success(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use stakegate_common::ChainInfo;
    use stakegate_staking::providers::{DedicatedStakingStats, NetworkStats, StakeRecord};
    use stakegate_staking::{ChainsRepository, Deployment, StakingRepository};
    use tower::ServiceExt;

    const DEPLOYMENT: &str = "0x0000000000000000000000000000000000000001";

    struct FakeChains;

    #[async_trait]
    impl ChainsRepository for FakeChains {
        async fn get_chain(&self, chain_id: &str) -> anyhow::Result<ChainInfo> {
            if chain_id != "1" {
                return Err(anyhow!("unknown chain {}", chain_id));
            }
            Ok(serde_json::from_value(json!({
                "chainId": "1",
                "chainName": "Ethereum",
                "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 }
            }))?)
        }
    }

    struct FakeStaking;

    #[async_trait]
    impl StakingRepository for FakeStaking {
        async fn get_deployment(&self, chain_id: &str, address: &Address) -> anyhow::Result<Deployment> {
            let expected: Address = DEPLOYMENT.parse()?;
            if chain_id != "1" || *address != expected {
                return Err(anyhow!("no deployment"));
            }
            Ok(serde_json::from_value(json!({
                "id": "dep-1",
                "name": "Dedicated",
                "chain": "eth",
                "chain_id": 1,
                "address": DEPLOYMENT,
                "product_type": "dedicated",
                "product_fee": "0.5",
                "status": "active"
            }))?)
        }

        async fn get_dedicated_staking_stats(&self, _chain_id: &str) -> anyhow::Result<DedicatedStakingStats> {
            Ok(serde_json::from_value(json!({ "gross_apy": { "last_30d": 3 } }))?)
        }

        async fn get_network_stats(&self, _chain_id: &str) -> anyhow::Result<NetworkStats> {
            Ok(serde_json::from_value(json!({
                "eth_price_usd": "1000",
                "estimated_entry_time_seconds": 3600,
                "estimated_exit_time_seconds": 7200,
                "estimated_withdrawal_time_seconds": 86400
            }))?)
        }

        async fn get_stakes(&self, _chain_id: &str, validators_public_keys: &str) -> anyhow::Result<Vec<StakeRecord>> {
            Ok(validators_public_keys
                .split(',')
                .map(|key| StakeRecord {
                    validator_address: key.to_string(),
                    state: Some("active_ongoing".to_string()),
                    rewards: "0.25".to_string(),
                })
                .collect())
        }
    }

    fn router() -> Router {
        let mapper = NativeStakingMapper::new(Arc::new(FakeChains), Arc::new(FakeStaking))
            .with_clock(|| Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        ApiServer::new(ApiConfig::default(), Arc::new(mapper)).router()
    }

    async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn public_keys(count: u8) -> String {
        let mut hex = String::from("0x");
        for i in 1..=count {
            hex.push_str(&format!("{:02x}", i).repeat(48));
        }
        hex
    }

    #[tokio::test]
    async fn test_deposit_endpoint() {
        let (status, body) = post(
            "/v1/chains/1/native-staking/deposit",
            json!({
                "to": DEPLOYMENT,
                "value": "64000000000000000000",
                "isConfirmed": false
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert_eq!(data["type"], "NativeStakingDeposit");
        assert_eq!(data["status"], "SIGNATURE_NEEDED");
        assert_eq!(data["numValidators"], 2);
        assert_eq!(data["annualNrr"], "1.5");
        assert_eq!(data["expectedAnnualReward"], "960000000000000000");
        assert_eq!(data["tokenInfo"]["symbol"], "ETH");
    }

    #[tokio::test]
    async fn test_validators_exit_endpoint() {
        let (status, body) = post(
            "/v1/chains/1/native-staking/validators-exit",
            json!({
                "to": DEPLOYMENT,
                "transaction": { "confirmationsRequired": 2, "confirmationsCount": 2 },
                "dataDecoded": {
                    "method": "requestValidatorsExit",
                    "parameters": [
                        { "name": "_publicKeys", "type": "bytes", "value": public_keys(2) }
                    ]
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["type"], "NativeStakingValidatorsExit");
        assert_eq!(data["status"], "AWAITING_EXECUTION");
        assert_eq!(data["value"], "64000000000000000000");
        assert_eq!(data["rewards"], "0.5");
        assert_eq!(data["validators"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_withdraw_endpoint_has_no_status() {
        let (status, body) = post(
            "/v1/chains/1/native-staking/withdraw",
            json!({
                "to": DEPLOYMENT,
                "transaction": { "confirmationsRequired": 1, "confirmationsCount": 0 },
                "dataDecoded": {
                    "method": "batchWithdrawCLFee",
                    "parameters": [
                        { "name": "_publicKeys", "type": "bytes", "value": public_keys(1) }
                    ]
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["type"], "NativeStakingWithdraw");
        assert!(body["data"].get("status").is_none());
        assert_eq!(body["data"]["numValidators"], 1);
    }

    #[tokio::test]
    async fn test_unknown_deployment_is_not_found() {
        let (status, body) = post(
            "/v1/chains/1/native-staking/deposit",
            json!({
                "to": "0x0000000000000000000000000000000000000002",
                "value": "32000000000000000000",
                "isConfirmed": true
            }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_invalid_deposit_value_is_bad_request() {
        for value in ["64 ether", "-1", "1.5"] {
            let (status, body) = post(
                "/v1/chains/1/native-staking/deposit",
                json!({ "to": DEPLOYMENT, "value": value, "isConfirmed": true }),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{value}");
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn test_invalid_address_is_bad_request() {
        let (status, _) = post(
            "/v1/chains/1/native-staking/deposit",
            json!({ "to": "not-an-address", "value": "1", "isConfirmed": true }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_inputs_are_unprocessable() {
        let transaction = json!({ "confirmationsRequired": 1, "confirmationsCount": 1 });

        let (status, _) = post(
            "/v1/chains/1/native-staking/validators-exit",
            json!({ "to": DEPLOYMENT, "transaction": transaction, "data": "0xdeadbeef" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = post(
            "/v1/chains/1/native-staking/withdraw",
            json!({ "to": DEPLOYMENT, "transaction": transaction }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = post(
            "/v1/chains/1/native-staking/validators-exit",
            json!({
                "to": DEPLOYMENT,
                "transaction": transaction,
                "dataDecoded": {
                    "method": "requestValidatorsExit",
                    "parameters": [{ "name": "_publicKeys", "type": "bytes", "value": "0xabc" }]
                }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }
}
