//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub ready: bool,
    /// Name of the emulated resource
    pub resource: String,
    /// Number of stored records
    pub records: usize,
}

/// Readiness check - can the store answer?
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Ready to accept requests", body = ReadinessResponse),
        (status = 503, description = "Store unavailable", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let service = &state.resources;
    let (status, ready, records) = match service.count().await {
        Ok(records) => (StatusCode::OK, true, records),
        Err(e) => {
            warn!(error = %e, "Record store not ready");
            (StatusCode::SERVICE_UNAVAILABLE, false, 0)
        },
    };

    (
        status,
        Json(ReadinessResponse {
            ready,
            resource: service.name().to_string(),
            records,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"status":"ok","version":"0.1.0"}"#);
    }

    #[test]
    fn readiness_response_deserialization() {
        let json = r#"{"ready":true,"resource":"payments","records":2}"#;
        let resp: ReadinessResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ready);
        assert_eq!(resp.resource, "payments");
        assert_eq!(resp.records, 2);
    }

    #[tokio::test]
    async fn health_check_reports_version() {
        let Json(resp) = health_check().await;
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }
}
