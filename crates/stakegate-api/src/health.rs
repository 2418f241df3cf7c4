// src/health.rs

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::types::{HealthCheckResult, HealthResponse, HealthStatus};

pub type HealthCheckFn = Arc<dyn Fn() -> BoxFuture<'static, HealthCheckResult> + Send + Sync>;

pub struct HealthService {
    checks: Arc<RwLock<HashMap<String, HealthCheckFn>>>,
    start_time: Instant,
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthService {
    pub fn new() -> Self {
        Self {
            checks: Arc::new(RwLock::new(HashMap::new())),
            start_time: Instant::now(),
        }
    }

    pub async fn register(&self, name: &str, check: HealthCheckFn) {
        let mut checks = self.checks.write().await;
        checks.insert(name.to_string(), check);
    }

    pub fn uptime(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub async fn check_all(&self) -> HealthResponse {
        // Snapshot so no lock is held across collaborator calls
        let checks: Vec<(String, HealthCheckFn)> = {
            let checks = self.checks.read().await;
            checks.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        };

        let mut results = HashMap::new();
        let mut all_healthy = true;
        let mut any_healthy = false;

        for (name, check) in checks {
            let result = check().await;

            match result.status {
                HealthStatus::Healthy => any_healthy = true,
                HealthStatus::Degraded => {
                    all_healthy = false;
                    any_healthy = true;
                }
                HealthStatus::Unhealthy => all_healthy = false,
            }

            results.insert(name, result);
        }

        let status = if all_healthy {
            HealthStatus::Healthy
        } else if any_healthy {
            HealthStatus::Degraded
        } else {
            HealthStatus::Unhealthy
        };

        HealthResponse {
            status,
            checks: results,
            uptime: self.uptime(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    fn fixed(status: HealthStatus) -> HealthCheckFn {
        Arc::new(move || {
            async move {
                HealthCheckResult {
                    status,
                    details: None,
                }
            }
            .boxed()
        })
    }

    #[tokio::test]
    async fn test_aggregate_status() {
        let health = HealthService::new();
        assert_eq!(health.check_all().await.status, HealthStatus::Healthy);

        health.register("chains", fixed(HealthStatus::Healthy)).await;
        health.register("staking", fixed(HealthStatus::Unhealthy)).await;
        let response = health.check_all().await;
        assert_eq!(response.status, HealthStatus::Degraded);
        assert_eq!(response.checks.len(), 2);

        let failing = HealthService::new();
        failing.register("staking", fixed(HealthStatus::Unhealthy)).await;
        assert_eq!(failing.check_all().await.status, HealthStatus::Unhealthy);
    }
}
