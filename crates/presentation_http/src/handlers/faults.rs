//! Fault policy and statistics handlers

use std::collections::BTreeMap;

use application::{ChaosStats, chaos::CategoryStats};
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::state::AppState;

/// Counters for one fault category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryStatsResponse {
    /// Checkpoint evaluations
    pub checks: u64,
    /// Evaluations that rejected the request
    pub enforced: u64,
    /// Evaluations where the check was skipped, or a delete was faked
    pub faults_injected: u64,
}

impl From<CategoryStats> for CategoryStatsResponse {
    fn from(stats: CategoryStats) -> Self {
        Self {
            checks: stats.checks,
            enforced: stats.enforced,
            faults_injected: stats.faults_injected,
        }
    }
}

/// Checkpoint statistics since startup or the last reset
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaultStatsResponse {
    pub checks: u64,
    pub enforced: u64,
    pub faults_injected: u64,
    /// Fraction of checks that injected a fault
    pub fault_rate: f64,
    /// Breakdown keyed by category tag
    pub by_category: BTreeMap<String, CategoryStatsResponse>,
}

impl From<ChaosStats> for FaultStatsResponse {
    fn from(stats: ChaosStats) -> Self {
        Self {
            checks: stats.checks,
            enforced: stats.enforced,
            faults_injected: stats.faults_injected,
            fault_rate: stats.fault_rate(),
            by_category: stats
                .by_category
                .into_iter()
                .map(|(category, counters)| (category.as_str().to_string(), counters.into()))
                .collect(),
        }
    }
}

/// Active fault policy
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaultsResponse {
    /// Enabled category tags
    pub enabled: Vec<String>,
    /// Disabled category tags
    pub disabled: Vec<String>,
    pub stats: FaultStatsResponse,
}

/// Show which categories are enabled and how often each fired
#[utoipa::path(
    get,
    path = "/v1/faults",
    tag = "faults",
    responses(
        (status = 200, description = "Active fault policy and statistics", body = FaultsResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_faults(State(state): State<AppState>) -> Json<FaultsResponse> {
    let injector = state.injector();
    let policy = injector.policy();

    Json(FaultsResponse {
        enabled: policy.enabled().map(|c| c.as_str().to_string()).collect(),
        disabled: policy.disabled().map(|c| c.as_str().to_string()).collect(),
        stats: injector.stats().into(),
    })
}

/// Zero the fault statistics
#[utoipa::path(
    post,
    path = "/v1/faults/reset",
    tag = "faults",
    responses(
        (status = 204, description = "Statistics cleared")
    )
)]
#[instrument(skip(state))]
pub async fn reset_fault_stats(State(state): State<AppState>) -> StatusCode {
    state.injector().reset();
    info!("Fault statistics reset");
    StatusCode::NO_CONTENT
}
