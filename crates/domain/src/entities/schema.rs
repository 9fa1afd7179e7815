//! Resource schema: the declared fields of the emulated resource

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{DomainError, FieldType};

/// Field name reserved for the store-assigned record id
pub const RESERVED_ID_FIELD: &str = "id";

/// One declared field of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Key the field appears under in payloads
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl FieldDefinition {
    /// Create a field definition
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            description: description.into(),
        }
    }
}

/// Ordered, immutable set of field definitions
///
/// Field names are unique, non-empty and never `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDefinition>", into = "Vec<FieldDefinition>")]
pub struct Schema {
    fields: Vec<FieldDefinition>,
}

impl Schema {
    /// Build a schema from field definitions in declaration order
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSchema` for an empty list, an empty or
    /// duplicated name, or a field named `id`.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self, DomainError> {
        if fields.is_empty() {
            return Err(DomainError::InvalidSchema(
                "schema must declare at least one field".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if field.name.is_empty() {
                return Err(DomainError::InvalidSchema(
                    "field names must not be empty".to_string(),
                ));
            }
            if field.name == RESERVED_ID_FIELD {
                return Err(DomainError::InvalidSchema(format!(
                    "field name '{RESERVED_ID_FIELD}' is reserved for the record id"
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(DomainError::InvalidSchema(format!(
                    "duplicate field '{}'",
                    field.name
                )));
            }
        }

        Ok(Self { fields })
    }

    /// All field definitions in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declared type of a field, if the field exists
    #[must_use]
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.field(name).map(|f| f.field_type)
    }

    /// Whether the schema declares `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of declared fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a constructed schema
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<FieldDefinition>> for Schema {
    type Error = DomainError;

    fn try_from(fields: Vec<FieldDefinition>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<Schema> for Vec<FieldDefinition> {
    fn from(schema: Schema) -> Self {
        schema.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payments() -> Schema {
        Schema::new(vec![
            FieldDefinition::new("amount", FieldType::Number, "Amount charged"),
            FieldDefinition::new("currency", FieldType::String, "ISO currency code"),
            FieldDefinition::new("credit_card_id", FieldType::Integer, "Card to charge"),
        ])
        .unwrap()
    }

    #[test]
    fn preserves_declaration_order() {
        let schema = payments();
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["amount", "currency", "credit_card_id"]);
        assert_eq!(schema.len(), 3);
        assert!(!schema.is_empty());
    }

    #[test]
    fn looks_up_field_types() {
        let schema = payments();
        assert_eq!(schema.field_type("amount"), Some(FieldType::Number));
        assert_eq!(schema.field_type("credit_card_id"), Some(FieldType::Integer));
        assert_eq!(schema.field_type("missing"), None);
        assert!(schema.contains("currency"));
        assert!(!schema.contains("id"));
    }

    #[test]
    fn rejects_empty_schema() {
        assert!(matches!(
            Schema::new(Vec::new()),
            Err(DomainError::InvalidSchema(_))
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Schema::new(vec![
            FieldDefinition::new("amount", FieldType::Number, ""),
            FieldDefinition::new("amount", FieldType::Integer, ""),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate field 'amount'"));
    }

    #[test]
    fn rejects_reserved_id_field() {
        let err = Schema::new(vec![FieldDefinition::new("id", FieldType::Integer, "")])
            .unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(Schema::new(vec![FieldDefinition::new("", FieldType::String, "")]).is_err());
    }

    #[test]
    fn deserializes_from_field_list() {
        let json = r#"[
            {"name": "active", "type": "boolean"},
            {"name": "label", "type": "string", "description": "Display label"}
        ]"#;
        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.field_type("active"), Some(FieldType::Boolean));
        assert_eq!(schema.field("label").unwrap().description, "Display label");
        assert_eq!(schema.field("active").unwrap().description, "");
    }

    #[test]
    fn deserialization_enforces_invariants() {
        let json = r#"[{"name": "a", "type": "string"}, {"name": "a", "type": "string"}]"#;
        assert!(serde_json::from_str::<Schema>(json).is_err());
    }

    #[test]
    fn deserialization_rejects_unknown_types() {
        let json = r#"[{"name": "a", "type": "date"}]"#;
        assert!(serde_json::from_str::<Schema>(json).is_err());
    }
}
