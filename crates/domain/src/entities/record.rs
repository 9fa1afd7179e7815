//! Stored resource instance

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RecordId;

/// Key/value body of a resource as supplied by a client
pub type Payload = Map<String, Value>;

/// A sanitized payload tagged with its store-assigned id
///
/// Serializes as one flat object: `{"id": 1, "amount": 10.5, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Schema fields of the record
    #[serde(flatten)]
    pub fields: Payload,
}

impl Record {
    /// Create a record from an id and its fields
    #[must_use]
    pub fn new(id: RecordId, fields: Payload) -> Self {
        Self { id, fields }
    }

    /// Shallow merge: fields present in `changes` overwrite, others are kept
    pub fn merge(&mut self, changes: Payload) {
        for (key, value) in changes {
            self.fields.insert(key, value);
        }
    }

    /// Look up a field value
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test payloads are objects"),
        }
    }

    #[test]
    fn serializes_flat_with_id() {
        let record = Record::new(
            RecordId::new(1),
            payload(json!({"amount": 10.5, "currency": "usd"})),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"id": 1, "amount": 10.5, "currency": "usd"}));
    }

    #[test]
    fn deserializes_flat_object() {
        let record: Record =
            serde_json::from_value(json!({"id": 4, "currency": "eur"})).unwrap();
        assert_eq!(record.id, RecordId::new(4));
        assert_eq!(record.get("currency"), Some(&json!("eur")));
        assert!(record.get("id").is_none());
    }

    #[test]
    fn merge_overwrites_given_fields_only() {
        let mut record = Record::new(
            RecordId::new(2),
            payload(json!({"amount": 1, "currency": "usd", "credit_card_id": 7})),
        );
        record.merge(payload(json!({"amount": 99})));
        assert_eq!(record.get("amount"), Some(&json!(99)));
        assert_eq!(record.get("currency"), Some(&json!("usd")));
        assert_eq!(record.get("credit_card_id"), Some(&json!(7)));
        assert_eq!(record.id, RecordId::new(2));
    }
}
