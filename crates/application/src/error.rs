//! Application-level errors

use domain::{DomainError, FaultCategory};
use thiserror::Error;

/// A payload check that was enforced and failed
///
/// Each variant belongs to exactly one fault category; it is only ever
/// produced when that category is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadRejection {
    /// Body could not be decoded
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Decoded body is not an object
    #[error("Unexpected payload root node: expected an object, found {found}")]
    UnexpectedRootShape { found: String },

    /// Fewer keys than the schema declares
    #[error("Payload is missing keys: expected {expected}, found {actual}")]
    MissingKeys { expected: usize, actual: usize },

    /// More keys than the schema declares
    #[error("Payload has extra keys: expected {expected}, found {actual}")]
    ExtraKeys { expected: usize, actual: usize },

    /// Field value does not match its declared type
    #[error("Wrong data type for field '{field}'")]
    WrongDataType { field: String },
}

impl PayloadRejection {
    /// Fault category that governs this rejection
    #[must_use]
    pub const fn category(&self) -> FaultCategory {
        match self {
            Self::InvalidPayload(_) => FaultCategory::InvalidPayload,
            Self::UnexpectedRootShape { .. } => FaultCategory::UnexpectedRootNode,
            Self::MissingKeys { .. } => FaultCategory::MissingKeys,
            Self::ExtraKeys { .. } => FaultCategory::ExtraKeys,
            Self::WrongDataType { .. } => FaultCategory::WrongDataTypes,
        }
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Payload check enforced by the fault injector
    #[error(transparent)]
    Rejected(#[from] PayloadRejection),

    /// Payload passed the enabled checks but is still not a valid object
    #[error("Invalid object: {0}")]
    InvalidObject(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
