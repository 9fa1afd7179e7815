//! RestFault HTTP presentation layer
//!
//! This crate provides the HTTP API: CRUD routes for the configured resource,
//! health endpoints, fault statistics and the OpenAPI document.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
