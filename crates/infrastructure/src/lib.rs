//! Infrastructure layer - Adapters for the outside world
//!
//! Implements ports defined in the application layer.
//! Contains configuration loading, the in-memory record store and log setup.

pub mod config;
pub mod persistence;
pub mod telemetry;

pub use config::{AppConfig, FaultsConfig, LogFormat, ResourceConfig, ServerConfig};
pub use persistence::InMemoryRecordStore;
pub use telemetry::{TelemetryError, init_tracing};
