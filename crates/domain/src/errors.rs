//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Schema definition is unusable
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Record identifier is not an unsigned integer
    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),

    /// Fault category tag is not one of the known categories
    #[error("Unknown fault category: {0}")]
    UnknownFaultCategory(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
