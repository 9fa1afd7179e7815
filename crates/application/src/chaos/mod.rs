//! Fault injection for emulating non-conformant APIs.
//!
//! Every check the request pipeline performs is routed through a single
//! [`FaultInjector`]. The injector consults its [`FaultPolicy`] and either
//! enforces the check (signalling an error) or silently lets the
//! non-conformant input through. Nothing in the pipeline is ever skipped;
//! faults are expressed purely as suppressed errors.
//!
//! # Overview
//!
//! - `FaultPolicy`: which fault categories are enabled
//! - `FaultInjector`: the checkpoint entry point shared by all handlers
//! - `ChaosContext`: lock-free counters of checks, enforcements and injected faults
//!
//! # Example
//!
//! ```
//! use application::chaos::{FaultInjector, FaultPolicy};
//! use domain::FaultCategory;
//!
//! let injector = FaultInjector::new(FaultPolicy::strict().without(FaultCategory::ExtraKeys));
//!
//! // Extra keys are let through instead of rejected.
//! assert!(injector.extra_keys(3, 5).is_ok());
//! assert!(injector.missing_keys(3, 2).is_err());
//! assert_eq!(injector.stats().faults_injected, 1);
//! ```

mod chaos_context;
mod fault_injector;
mod fault_policy;

pub use chaos_context::{CategoryStats, ChaosContext, ChaosStats, CheckOutcome};
pub use fault_injector::{FaultInjector, FaultTriggered};
pub use fault_policy::FaultPolicy;
