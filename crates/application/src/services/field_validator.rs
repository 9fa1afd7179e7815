//! Field validator
//!
//! Applies the schema's per-field type rules to a sanitized payload.

use std::collections::BTreeMap;
use std::sync::Arc;

use domain::{Payload, Schema};
use serde_json::Value;

use crate::{chaos::FaultInjector, error::PayloadRejection};

/// Per-field pass/fail of one validation run
pub type ValidationResult = BTreeMap<String, bool>;

/// Which operation a payload is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every schema field must be present
    Create,
    /// Any non-empty subset of schema fields
    Update,
}

/// Type-checks payload fields against the schema
#[derive(Debug, Clone)]
pub struct FieldValidator {
    injector: Arc<FaultInjector>,
}

impl FieldValidator {
    /// Create a validator reporting to the given injector
    pub fn new(injector: Arc<FaultInjector>) -> Self {
        Self { injector }
    }

    /// Check one value against the declared type of `name`
    ///
    /// Unknown fields fail.
    pub fn validate_field(name: &str, value: &Value, schema: &Schema) -> bool {
        schema
            .field_type(name)
            .is_some_and(|field_type| field_type.accepts(value))
    }

    /// Validate every field of `payload`, routing each result through the
    /// wrong-data-type check
    pub fn validate_fields(
        &self,
        payload: &Payload,
        schema: &Schema,
    ) -> Result<ValidationResult, PayloadRejection> {
        let mut results = ValidationResult::new();
        for (name, value) in payload {
            let valid = Self::validate_field(name, value, schema);
            results.insert(name.clone(), valid);
            self.injector.wrong_data_type(name, valid)?;
        }
        Ok(results)
    }

    /// Whether `payload` is a valid object for `mode`
    ///
    /// The boolean is computed from the per-field results regardless of
    /// whether the injector signalled; a suppressed type error still yields
    /// `false` here.
    pub fn valid_obj(
        &self,
        payload: &Payload,
        schema: &Schema,
        mode: ValidationMode,
    ) -> Result<bool, PayloadRejection> {
        match mode {
            ValidationMode::Create if payload.len() != schema.len() => return Ok(false),
            ValidationMode::Update if payload.is_empty() => return Ok(false),
            _ => {},
        }

        let results = self.validate_fields(payload, schema)?;
        Ok(results.values().all(|valid| *valid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chaos::FaultPolicy;
    use domain::{FaultCategory, FieldDefinition, FieldType};
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDefinition::new("amount", FieldType::Number, ""),
            FieldDefinition::new("currency", FieldType::String, ""),
            FieldDefinition::new("credit_card_id", FieldType::Integer, ""),
            FieldDefinition::new("captured", FieldType::Boolean, ""),
        ])
        .unwrap()
    }

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test payloads are objects"),
        }
    }

    fn validator(policy: FaultPolicy) -> FieldValidator {
        FieldValidator::new(Arc::new(FaultInjector::new(policy)))
    }

    #[test]
    fn validate_field_uses_declared_type() {
        let schema = schema();
        assert!(FieldValidator::validate_field("amount", &json!(10.5), &schema));
        assert!(FieldValidator::validate_field("currency", &json!("usd"), &schema));
        assert!(FieldValidator::validate_field("credit_card_id", &json!(1), &schema));
        assert!(FieldValidator::validate_field("captured", &json!(false), &schema));
        assert!(!FieldValidator::validate_field("amount", &json!("lots"), &schema));
        assert!(!FieldValidator::validate_field("currency", &json!(""), &schema));
    }

    #[test]
    fn validate_field_fails_unknown_fields() {
        assert!(!FieldValidator::validate_field("note", &json!("x"), &schema()));
    }

    #[test]
    fn complete_well_typed_payload_is_valid_for_create() {
        let p = payload(json!({
            "amount": 10.5, "currency": "usd", "credit_card_id": 1, "captured": true
        }));
        assert!(
            validator(FaultPolicy::strict())
                .valid_obj(&p, &schema(), ValidationMode::Create)
                .unwrap()
        );
    }

    #[test]
    fn create_requires_every_field() {
        let p = payload(json!({"amount": 10.5, "currency": "usd", "credit_card_id": 1}));
        assert!(
            !validator(FaultPolicy::strict())
                .valid_obj(&p, &schema(), ValidationMode::Create)
                .unwrap()
        );
    }

    #[test]
    fn update_accepts_partial_payloads() {
        let p = payload(json!({"currency": "eur"}));
        assert!(
            validator(FaultPolicy::strict())
                .valid_obj(&p, &schema(), ValidationMode::Update)
                .unwrap()
        );
    }

    #[test]
    fn update_rejects_empty_payloads() {
        assert!(
            !validator(FaultPolicy::strict())
                .valid_obj(&Payload::new(), &schema(), ValidationMode::Update)
                .unwrap()
        );
    }

    #[test]
    fn wrong_type_signals_when_enforced() {
        let p = payload(json!({"amount": "a lot"}));
        assert_eq!(
            validator(FaultPolicy::strict())
                .valid_obj(&p, &schema(), ValidationMode::Update)
                .unwrap_err(),
            PayloadRejection::WrongDataType {
                field: "amount".to_string()
            }
        );
    }

    #[test]
    fn wrong_type_still_invalid_when_suppressed() {
        let p = payload(json!({"amount": "a lot", "currency": "usd"}));
        let validator =
            validator(FaultPolicy::strict().without(FaultCategory::WrongDataTypes));
        assert!(
            !validator
                .valid_obj(&p, &schema(), ValidationMode::Update)
                .unwrap()
        );
    }

    #[test]
    fn validate_fields_reports_each_field() {
        let p = payload(json!({"amount": "a lot", "currency": "usd"}));
        let results = validator(FaultPolicy::permissive())
            .validate_fields(&p, &schema())
            .unwrap();
        assert_eq!(results.get("amount"), Some(&false));
        assert_eq!(results.get("currency"), Some(&true));
    }
}
