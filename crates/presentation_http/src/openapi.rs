//! OpenAPI documentation module
//!
//! Describes the RestFault HTTP API and serves the document as JSON.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::{handlers, state::AppState};

/// Path the OpenAPI document is served under
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for RestFault
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RestFault API",
        description = "Schema-driven in-memory REST resource with switchable validation faults",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Liveness and readiness endpoints"),
        (name = "resources", description = "CRUD over the configured resource"),
        (name = "faults", description = "Active fault policy and checkpoint statistics")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::resources::create_record,
        handlers::resources::get_record,
        handlers::resources::update_record,
        handlers::resources::delete_record,
        handlers::faults::get_faults,
        handlers::faults::reset_fault_stats,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::resources::RecordResponse,
            handlers::resources::StatusResponse,
            handlers::faults::FaultsResponse,
            handlers::faults::FaultStatsResponse,
            handlers::faults::CategoryStatsResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document
pub fn create_openapi_routes() -> Router<AppState> {
    let doc = ApiDoc::openapi();
    Router::new().route(
        OPENAPI_JSON_PATH,
        get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }),
    )
}
