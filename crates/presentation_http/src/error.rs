//! API error handling
//!
//! Maps application errors onto status codes and a uniform JSON body. Payload
//! rejections carry the fault category tag as their `code` so clients can tell
//! which check fired.

use application::{ApplicationError, PayloadRejection};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// An enforced payload check failed
    #[error("Payload rejected: {0}")]
    PayloadRejected(PayloadRejection),

    /// The payload passed the enforced checks but is not a valid object
    #[error("Invalid object: {0}")]
    InvalidObject(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Machine-readable code placed in the response body
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PayloadRejected(rejection) => rejection.category().as_str(),
            Self::InvalidObject(_) => "invalid_object",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal_error",
        }
    }

    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::PayloadRejected(_) | Self::InvalidObject(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code: a fault category tag, `invalid_object`, `not_found` or `internal_error`
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            Self::PayloadRejected(rejection) => {
                debug!(code, %rejection, "Payload rejected");
                ("Payload rejected".to_string(), Some(rejection.to_string()))
            },
            Self::InvalidObject(msg) => {
                debug!(code, %msg, "Invalid object");
                ("Invalid object".to_string(), Some(msg))
            },
            Self::NotFound(msg) => (msg, None),
            Self::Internal(msg) => {
                error!(%msg, "Internal error");
                ("An internal error occurred".to_string(), Some(msg))
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Rejected(rejection) => Self::PayloadRejected(rejection),
            ApplicationError::InvalidObject(msg) => Self::InvalidObject(msg),
            ApplicationError::Domain(e @ DomainError::NotFound { .. }) => {
                Self::NotFound(e.to_string())
            },
            ApplicationError::Domain(DomainError::InvalidRecordId(id)) => {
                Self::NotFound(format!("No record with id '{id}'"))
            },
            ApplicationError::Domain(e) => Self::Internal(e.to_string()),
            ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
