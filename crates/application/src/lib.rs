//! Application layer - Use cases and orchestration
//!
//! Contains the request pipeline (parse, sanitize, validate, store), the fault
//! injector that can switch individual checks off, and the store port.

pub mod chaos;
pub mod error;
pub mod ports;
pub mod services;

pub use chaos::{ChaosStats, FaultInjector, FaultPolicy};
pub use error::{ApplicationError, PayloadRejection};
pub use ports::*;
pub use services::*;
