//! Application services - Use case implementations

mod field_validator;
mod payload_parser;
mod resource_service;
mod schema_sanitizer;

pub use field_validator::{FieldValidator, ValidationMode, ValidationResult};
pub use payload_parser::{ParsedPayload, PayloadParser, json_kind};
pub use resource_service::ResourceService;
pub use schema_sanitizer::SchemaSanitizer;
