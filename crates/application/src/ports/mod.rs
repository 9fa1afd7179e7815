//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod record_store;

#[cfg(test)]
pub use record_store::MockRecordStorePort;
pub use record_store::RecordStorePort;
