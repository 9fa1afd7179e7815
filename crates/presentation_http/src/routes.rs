//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, middleware::RequestIdLayer, openapi, state::AppState};

/// Create the main router with all routes
///
/// Request bodies are capped at `server.max_body_size_bytes`; larger bodies
/// get 413 before reaching a handler.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Fault policy (v1)
        .route("/v1/faults", get(handlers::faults::get_faults))
        .route("/v1/faults/reset", post(handlers::faults::reset_fault_stats))
        // Resource API (v1)
        .route("/v1/{resource}", post(handlers::resources::create_record))
        .route(
            "/v1/{resource}/{id}",
            get(handlers::resources::get_record)
                .put(handlers::resources::update_record)
                .delete(handlers::resources::delete_record),
        )
        // OpenAPI document
        .merge(openapi::create_openapi_routes())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(RequestIdLayer::new())
        // Attach state
        .with_state(state)
}
