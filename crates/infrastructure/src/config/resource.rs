//! Emulated resource configuration.

use domain::{FieldDefinition, FieldType, Schema};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// The resource exposed under `/v1/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ResourceConfig {
    /// Path segment and display name
    #[serde(default = "default_name")]
    #[validate(
        length(min = 1, max = 64),
        custom(function = "validate_path_segment")
    )]
    pub name: String,

    /// Declared fields, in order
    #[serde(default = "default_schema", rename = "fields")]
    pub schema: Schema,
}

fn default_name() -> String {
    "payments".to_string()
}

fn default_schema() -> Schema {
    Schema::new(vec![
        FieldDefinition::new("amount", FieldType::Number, "Amount charged"),
        FieldDefinition::new("currency", FieldType::String, "ISO currency code"),
        FieldDefinition::new(
            "credit_card_id",
            FieldType::Integer,
            "Identifier of the card charged",
        ),
    ])
    .unwrap_or_else(|_| unreachable!("built-in schema is valid"))
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            schema: default_schema(),
        }
    }
}

/// Static path segments the router claims under `/v1`
const RESERVED_NAMES: [&str; 1] = ["faults"];

fn validate_path_segment(name: &str) -> Result<(), ValidationError> {
    if RESERVED_NAMES.contains(&name) {
        return Err(ValidationError::new("reserved")
            .with_message(format!("resource name '{name}' is reserved").into()));
    }
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("path_segment")
            .with_message("resource name must be ASCII letters, digits, '-' or '_'".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_payments() {
        let config = ResourceConfig::default();
        assert!(config.validate().is_ok());
        let names: Vec<_> = config.schema.names().collect();
        assert_eq!(names, ["amount", "currency", "credit_card_id"]);
    }

    #[test]
    fn name_must_be_url_safe() {
        for name in ["", "pay ments", "a/b", "caf\u{e9}", "faults"] {
            let config = ResourceConfig {
                name: name.to_string(),
                ..ResourceConfig::default()
            };
            assert!(config.validate().is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn deserializes_fields_key() {
        let config: ResourceConfig = serde_json::from_str(
            r#"{"name": "users", "fields": [{"name": "active", "type": "boolean"}]}"#,
        )
        .unwrap();
        assert_eq!(config.schema.field_type("active"), Some(FieldType::Boolean));
    }
}
