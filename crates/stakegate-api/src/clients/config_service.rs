// crates/stakegate-api/src/clients/config_service.rs

use {
    super::{build_http_client, probe, read_json},
    anyhow::Result,
    async_trait::async_trait,
    stakegate_common::{ChainInfo, ConfigServiceConfig},
    stakegate_staking::ChainsRepository,
    std::time::Duration,
    tracing::debug,
};

/// Chain registry client
#[derive(Clone)]
pub struct ConfigServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl ConfigServiceClient {
    pub fn new(config: &ConfigServiceConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: build_http_client(timeout)?,
        })
    }

    pub async fn check_health(&self) -> std::result::Result<(), String> {
        probe(&self.client, &self.base_url).await
    }
}

#[async_trait]
impl ChainsRepository for ConfigServiceClient {
    async fn get_chain(&self, chain_id: &str) -> Result<ChainInfo> {
        debug!("Fetching chain {}", chain_id);
        let url = format!("{}/api/v1/chains/{}", self.base_url, chain_id);
        read_json(self.client.get(url), "chain").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> ConfigServiceClient {
        let config = ConfigServiceConfig {
            base_url: format!("{}/", server.base_url()),
        };
        ConfigServiceClient::new(&config, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_chain() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/chains/1");
                then.status(200).json_body(json!({
                    "chainId": "1",
                    "chainName": "Ethereum",
                    "nativeCurrency": {
                        "name": "Ether",
                        "symbol": "ETH",
                        "decimals": 18,
                        "logoUri": "https://example.org/eth.png"
                    }
                }));
            })
            .await;

        let chain = client(&server).get_chain("1").await.unwrap();
        assert_eq!(chain.chain_id, "1");
        assert_eq!(chain.native_currency.symbol, "ETH");
    }

    #[tokio::test]
    async fn test_unknown_chain_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/chains/999");
                then.status(404);
            })
            .await;

        assert!(client(&server).get_chain("999").await.is_err());
    }
}
