//! Operational probes for the site process and its content store.

use axum::{extract::State, http::StatusCode, Json};
use persistence::metrics::{record_pool_metrics, PoolStats};
use serde::Serialize;

use crate::app::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseHealth {
    pub connected: bool,
    pub latency_ms: Option<u64>,
    pub pool_size: u32,
    pub pool_idle: u32,
}

impl DatabaseHealth {
    fn new(latency_ms: Option<u64>, pool: PoolStats) -> Self {
        Self {
            connected: latency_ms.is_some(),
            latency_ms,
            pool_size: pool.size,
            pool_idle: pool.idle,
        }
    }
}

/// Body of the liveness and readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// `GET /health`: store connectivity, latency and pool usage.
///
/// The body is returned in both cases; the status is 503 when the store
/// does not answer.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let latency_ms = match persistence::db::ping(&state.pool).await {
        Ok(elapsed) => Some(elapsed.as_millis() as u64),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed: content store unreachable");
            None
        }
    };
    let database = DatabaseHealth::new(latency_ms, record_pool_metrics(&state.pool));

    let (status, label) = if database.connected {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// `GET /health/live`: the process is serving requests.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse { status: "alive" })
}

/// `GET /health/ready`: 200 once the content store answers.
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    persistence::db::ping(&state.pool)
        .await
        .map(|_| Json(StatusResponse { status: "ready" }))
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            version: "0.3.0",
            database: DatabaseHealth::new(Some(5), PoolStats { size: 4, idle: 3 }),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"]["connected"], true);
        assert_eq!(json["database"]["latency_ms"], 5);
        assert_eq!(json["database"]["pool_size"], 4);
        assert_eq!(json["database"]["pool_idle"], 3);
    }

    #[test]
    fn test_unreachable_store_has_no_latency() {
        let health = DatabaseHealth::new(None, PoolStats { size: 0, idle: 0 });
        assert!(!health.connected);
        let json = serde_json::to_value(&health).unwrap();
        assert!(json["latency_ms"].is_null());
    }

    #[tokio::test]
    async fn test_live() {
        let Json(response) = live().await;
        assert_eq!(response.status, "alive");
    }
}
