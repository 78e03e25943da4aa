//! Health probing and aggregation
//!
//! The gateway's own liveness is implied by the handler executing; this
//! service adds the reachability of the internal data service and folds both
//! into one composite report.

use chrono::Utc;

use crate::error::GatewayError;
use crate::infrastructure::http_client;
use crate::models::*;
use crate::state::GatewayState;

pub const SERVICE_NAME: &str = "main-backend";

/// Probe the internal service's health endpoint.
async fn check_internal_health(state: &GatewayState) -> Result<InternalHealth, GatewayError> {
    let url = format!("{}/health", state.internal_backend_url);

    let response = http_client::get(&url)
        .await
        .map_err(GatewayError::UpstreamUnreachable)?;

    if !response.status().is_success() {
        return Err(GatewayError::Internal(format!(
            "internal backend health returned {}",
            response.status()
        )));
    }

    response.json().await.map_err(GatewayError::from_transport)
}

/// Build the composite report: healthy iff the probe succeeded.
///
/// Returns the report together with whether it is the healthy variant, so the
/// handler can pick the status code. Raw transport diagnostics are logged
/// here and never placed in the report body.
pub async fn composite_report(state: &GatewayState) -> (bool, HealthReport) {
    let url = state.internal_backend_url.to_string();

    match check_internal_health(state).await {
        Ok(internal) => (
            true,
            HealthReport {
                status: "healthy".to_string(),
                service: SERVICE_NAME.to_string(),
                timestamp: Utc::now(),
                uptime: state.uptime_secs(),
                error: None,
                dependencies: Dependencies {
                    internal_backend: DependencyHealth {
                        status: internal.status,
                        url,
                        error: None,
                    },
                },
            },
        ),
        Err(err) => {
            tracing::error!(error = ?err, "internal backend health check failed");
            (
                false,
                HealthReport {
                    status: "unhealthy".to_string(),
                    service: SERVICE_NAME.to_string(),
                    timestamp: Utc::now(),
                    uptime: state.uptime_secs(),
                    error: Some("Internal backend is not reachable".to_string()),
                    dependencies: Dependencies {
                        internal_backend: DependencyHealth {
                            status: "unhealthy".to_string(),
                            url,
                            error: Some(err.to_string()),
                        },
                    },
                },
            )
        }
    }
}
