//! Domain entities - Objects with identity and lifecycle

mod record;
mod schema;

pub use record::{Payload, Record};
pub use schema::{FieldDefinition, RESERVED_ID_FIELD, Schema};
