//! HTTP clients for the gateway's upstream collaborators

mod config_service;
mod kiln;

pub use config_service::ConfigServiceClient;
pub use kiln::KilnClient;

use {
    anyhow::{Context, Result},
    serde::{de::DeserializeOwned, Deserialize},
    std::time::Duration,
};

/// Response envelope used by the staking provider
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    what: &str,
) -> Result<T> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Request for {} failed", what))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Upstream returned {} for {}: {}", status, what, body);
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Failed to parse {} response", what))
}

/// Reachability probe; any response below 500 counts as up.
pub(crate) async fn probe(client: &reqwest::Client, url: &str) -> std::result::Result<(), String> {
    match client.get(url).send().await {
        Ok(response) if response.status().is_server_error() => {
            Err(format!("Upstream returned {}", response.status()))
        }
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}
