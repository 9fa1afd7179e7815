//! Payload parser
//!
//! Decodes raw request bodies and classifies the root shape.

use std::sync::Arc;

use domain::Payload;
use serde_json::Value;
use tracing::debug;

use crate::{chaos::FaultInjector, error::PayloadRejection};

/// Result of decoding a request body
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPayload {
    /// Whether the body may continue down the pipeline
    pub accepted: bool,
    /// Decoded value; an empty object when decoding failed
    pub value: Value,
}

impl ParsedPayload {
    fn rejected() -> Self {
        Self {
            accepted: false,
            value: Value::Object(Payload::new()),
        }
    }

    /// The decoded value as an object, if it is one
    pub fn as_object(&self) -> Option<&Payload> {
        self.value.as_object()
    }
}

/// Name of a JSON value's kind, for diagnostics
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Turns raw bytes into a structured payload
#[derive(Debug, Clone)]
pub struct PayloadParser {
    injector: Arc<FaultInjector>,
}

impl PayloadParser {
    /// Create a parser reporting to the given injector
    pub fn new(injector: Arc<FaultInjector>) -> Self {
        Self { injector }
    }

    /// Decode `raw` as JSON
    ///
    /// A decode failure is never accepted, whether or not the
    /// `invalid_payload` check is enforced. A non-object root is accepted
    /// when the `unexpected_payload_root_node` check is suppressed.
    pub fn parse(&self, raw: &[u8]) -> Result<ParsedPayload, PayloadRejection> {
        let value = match serde_json::from_slice::<Value>(raw) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "Failed to decode payload");
                self.injector.invalid_payload(&e.to_string())?;
                return Ok(ParsedPayload::rejected());
            },
        };

        self.injector
            .unexpected_root_node(!value.is_object(), json_kind(&value))?;

        Ok(ParsedPayload {
            accepted: true,
            value,
        })
    }
}
