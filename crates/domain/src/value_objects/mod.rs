//! Value Objects - Immutable, identity-less domain primitives

mod fault_category;
mod field_type;
mod record_id;

pub use fault_category::FaultCategory;
pub use field_type::FieldType;
pub use record_id::RecordId;
