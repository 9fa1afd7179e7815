//! Schema sanitizer
//!
//! Restricts a payload to the keys the schema declares.

use std::sync::Arc;

use domain::{Payload, Schema};
use serde_json::Value;

use crate::{chaos::FaultInjector, error::PayloadRejection};

/// Strips undeclared keys and flags key-count mismatches
#[derive(Debug, Clone)]
pub struct SchemaSanitizer {
    injector: Arc<FaultInjector>,
}

impl SchemaSanitizer {
    /// Create a sanitizer reporting to the given injector
    pub fn new(injector: Arc<FaultInjector>) -> Self {
        Self { injector }
    }

    /// Return a copy of `payload` holding only schema keys
    ///
    /// Key counts are compared against the schema before stripping, and the
    /// missing-keys check runs again afterwards since stripping can expose a
    /// shortfall. A non-object payload has no keys. The input is not mutated.
    pub fn sanitize(&self, payload: &Value, schema: &Schema) -> Result<Payload, PayloadRejection> {
        let empty = Payload::new();
        let source = payload.as_object().unwrap_or(&empty);
        let expected = schema.len();

        self.injector.missing_keys(expected, source.len())?;
        self.injector.extra_keys(expected, source.len())?;

        let sanitized: Payload = source
            .iter()
            .filter(|(key, _)| schema.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        self.injector.missing_keys(expected, sanitized.len())?;

        Ok(sanitized)
    }
}
