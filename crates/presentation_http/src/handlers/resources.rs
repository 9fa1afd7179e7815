//! Resource CRUD handlers
//!
//! Bodies are taken as raw bytes so the pipeline, not the extractor, decides
//! what happens to malformed JSON.

use application::ResourceService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bytes::Bytes;
use domain::{Payload, Record};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Acknowledgement of an update or delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// `updated` or `deleted`
    pub status: String,
    /// Affected record id
    pub id: u64,
}

impl StatusResponse {
    fn new(status: &str, id: domain::RecordId) -> Self {
        Self {
            status: status.to_string(),
            id: id.value(),
        }
    }
}

/// A stored record: the assigned `id` next to the resource's fields
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "amount": 10.5,
    "currency": "usd",
    "credit_card_id": 1
}))]
pub struct RecordResponse {
    /// Store-assigned id
    pub id: u64,
    /// Field values, flattened into the object
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Payload,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            id: record.id.value(),
            fields: record.fields,
        }
    }
}

fn resource<'a>(state: &'a AppState, name: &str) -> Result<&'a ResourceService, ApiError> {
    if state.resources.name() == name {
        Ok(&state.resources)
    } else {
        Err(ApiError::NotFound(format!("Unknown resource '{name}'")))
    }
}

/// Create a record
#[utoipa::path(
    post,
    path = "/v1/{resource}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "Configured resource name")
    ),
    request_body(content = serde_json::Value, description = "Field values for every schema field"),
    responses(
        (status = 201, description = "Record created", body = RecordResponse),
        (status = 400, description = "Payload rejected or invalid", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown resource", body = crate::error::ErrorResponse),
        (status = 413, description = "Body exceeds the configured limit")
    )
)]
#[instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn create_record(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let record = resource(&state, &name)?.create(&body).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Read a record
#[utoipa::path(
    get,
    path = "/v1/{resource}/{id}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "Configured resource name"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record found", body = RecordResponse),
        (status = 404, description = "Unknown resource, malformed or absent id", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_record(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = resource(&state, &name)?.read(&id).await?;
    Ok(Json(record.into()))
}

/// Merge fields into a record
#[utoipa::path(
    put,
    path = "/v1/{resource}/{id}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "Configured resource name"),
        ("id" = String, Path, description = "Record id")
    ),
    request_body(content = serde_json::Value, description = "Field values to overwrite"),
    responses(
        (status = 200, description = "Record updated", body = StatusResponse),
        (status = 400, description = "Payload rejected or invalid", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown resource, malformed or absent id", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn update_record(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = resource(&state, &name)?.update(&id, &body).await?;
    Ok(Json(StatusResponse::new("updated", id)))
}

/// Delete a record
#[utoipa::path(
    delete,
    path = "/v1/{resource}/{id}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "Configured resource name"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record deleted", body = StatusResponse),
        (status = 404, description = "Unknown resource, malformed or absent id", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_record(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = resource(&state, &name)?.delete(&id).await?;
    Ok(Json(StatusResponse::new("deleted", id)))
}
