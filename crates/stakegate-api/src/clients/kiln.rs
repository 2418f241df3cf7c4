// crates/stakegate-api/src/clients/kiln.rs

use {
    super::{build_http_client, probe, read_json, DataEnvelope},
    alloy_primitives::Address,
    anyhow::{anyhow, Result},
    async_trait::async_trait,
    stakegate_common::StakingApiConfig,
    stakegate_staking::{
        providers::{DedicatedStakingStats, NetworkStats, StakeRecord},
        Deployment, StakingRepository,
    },
    std::time::Duration,
    tracing::debug,
};

/// Staking provider client backed by the Kiln REST API
#[derive(Clone)]
pub struct KilnClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl KilnClient {
    pub fn new(config: &StakingApiConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client: build_http_client(timeout)?,
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    pub async fn check_health(&self) -> std::result::Result<(), String> {
        probe(&self.client, &self.base_url).await
    }
}

#[async_trait]
impl StakingRepository for KilnClient {
    async fn get_deployment(&self, chain_id: &str, address: &Address) -> Result<Deployment> {
        debug!("Fetching deployments for chain {}", chain_id);
        let envelope: DataEnvelope<Vec<Deployment>> =
            read_json(self.get("/v1/deployments"), "deployments").await?;

        envelope
            .data
            .into_iter()
            .find(|deployment| {
                deployment.chain_id.to_string() == chain_id
                    && deployment.address.parse::<Address>().ok().as_ref() == Some(address)
            })
            .ok_or_else(|| anyhow!("No deployment {} on chain {}", address, chain_id))
    }

    async fn get_dedicated_staking_stats(&self, chain_id: &str) -> Result<DedicatedStakingStats> {
        debug!("Fetching dedicated staking stats for chain {}", chain_id);
        let envelope: DataEnvelope<DedicatedStakingStats> =
            read_json(self.get("/v1/eth/kiln-stats"), "dedicated staking stats").await?;
        Ok(envelope.data)
    }

    async fn get_network_stats(&self, chain_id: &str) -> Result<NetworkStats> {
        debug!("Fetching network stats for chain {}", chain_id);
        let envelope: DataEnvelope<NetworkStats> =
            read_json(self.get("/v1/eth/network-stats"), "network stats").await?;
        Ok(envelope.data)
    }

    async fn get_stakes(
        &self,
        chain_id: &str,
        validators_public_keys: &str,
    ) -> Result<Vec<StakeRecord>> {
        debug!("Fetching stakes for chain {}", chain_id);
        let request = self
            .get("/v1/eth/stakes")
            .query(&[("validators", validators_public_keys)]);
        let envelope: DataEnvelope<Vec<StakeRecord>> = read_json(request, "stakes").await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::str::FromStr;

    const DEPLOYMENT: &str = "0x0000000000000000000000000000000000000001";

    fn client(server: &MockServer) -> KilnClient {
        let config = StakingApiConfig {
            base_url: server.base_url(),
            api_key: "test-key".to_string(),
        };
        KilnClient::new(&config, Duration::from_secs(5)).unwrap()
    }

    fn deployment(chain_id: u64, address: &str) -> serde_json::Value {
        json!({
            "id": format!("dep-{}-{}", chain_id, address),
            "name": "Dedicated",
            "chain": "eth",
            "chain_id": chain_id,
            "address": address,
            "product_type": "dedicated",
            "product_fee": "0.08",
            "status": "active"
        })
    }

    #[tokio::test]
    async fn test_get_deployment_matches_chain_and_address() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/deployments")
                    .header("authorization", "Bearer test-key");
                then.status(200).json_body(json!({
                    "data": [
                        deployment(17000, DEPLOYMENT),
                        deployment(1, "0x0000000000000000000000000000000000000002"),
                        deployment(1, DEPLOYMENT),
                    ]
                }));
            })
            .await;

        let address: Address = DEPLOYMENT.parse().unwrap();
        let found = client(&server).get_deployment("1", &address).await.unwrap();

        mock.assert_async().await;
        assert_eq!(found.chain_id, 1);
        assert_eq!(found.address, DEPLOYMENT);
        assert_eq!(found.product_fee.as_deref(), Some("0.08"));
    }

    #[tokio::test]
    async fn test_get_deployment_missing_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/deployments");
                then.status(200).json_body(json!({ "data": [] }));
            })
            .await;

        let address: Address = DEPLOYMENT.parse().unwrap();
        assert!(client(&server).get_deployment("1", &address).await.is_err());
    }

    #[tokio::test]
    async fn test_get_network_stats_accepts_numeric_price() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/eth/network-stats");
                then.status(200).json_body(json!({
                    "data": {
                        "eth_price_usd": 3000.5,
                        "estimated_entry_time_seconds": 3600,
                        "estimated_exit_time_seconds": 7200,
                        "estimated_withdrawal_time_seconds": 86400
                    }
                }));
            })
            .await;

        let stats = client(&server).get_network_stats("1").await.unwrap();
        assert_eq!(stats.eth_price_usd, BigDecimal::from_str("3000.5").unwrap());
        assert_eq!(stats.estimated_exit_time_seconds, 7200);
    }

    #[tokio::test]
    async fn test_get_stakes_passes_validators_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/eth/stakes")
                    .query_param("validators", "0xaa,0xbb");
                then.status(200).json_body(json!({
                    "data": [
                        { "validator_address": "0xaa", "state": "active_ongoing", "rewards": "1.5" },
                        { "validator_address": "0xbb", "rewards": "2" }
                    ]
                }));
            })
            .await;

        let stakes = client(&server).get_stakes("1", "0xaa,0xbb").await.unwrap();

        mock.assert_async().await;
        assert_eq!(stakes.len(), 2);
        assert_eq!(stakes[1].state, None);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/eth/kiln-stats");
                then.status(503).body("maintenance");
            })
            .await;

        let err = client(&server)
            .get_dedicated_staking_stats("1")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("503"));
    }
}
