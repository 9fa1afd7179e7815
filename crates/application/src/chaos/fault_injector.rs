//! Fault injector: the single checkpoint every pipeline check goes through.

use domain::FaultCategory;
use thiserror::Error;
use tracing::debug;

use super::{ChaosContext, ChaosStats, CheckOutcome, FaultPolicy};
use crate::error::PayloadRejection;

/// An enabled category whose triggering condition held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} check failed")]
pub struct FaultTriggered(pub FaultCategory);

/// Decides, per checkpoint, whether a failed check is signalled or suppressed
#[derive(Debug, Default)]
pub struct FaultInjector {
    policy: FaultPolicy,
    context: ChaosContext,
}

impl FaultInjector {
    /// Create an injector for the given policy
    pub fn new(policy: FaultPolicy) -> Self {
        Self {
            policy,
            context: ChaosContext::new(),
        }
    }

    /// Injector for a conformant API
    pub fn strict() -> Self {
        Self::new(FaultPolicy::strict())
    }

    /// Injector that suppresses every check
    pub fn permissive() -> Self {
        Self::new(FaultPolicy::permissive())
    }

    /// The active policy
    pub const fn policy(&self) -> &FaultPolicy {
        &self.policy
    }

    /// Evaluate a checkpoint
    ///
    /// Signals an error only if `category` is enabled and `triggered` holds.
    /// A triggered condition in a disabled category is let through silently.
    pub fn check(&self, category: FaultCategory, triggered: bool) -> Result<(), FaultTriggered> {
        let outcome = match (triggered, self.policy.is_enabled(category)) {
            (false, _) => CheckOutcome::Passed,
            (true, true) => CheckOutcome::Enforced,
            (true, false) => CheckOutcome::Suppressed,
        };
        self.context.record(category, outcome);

        match outcome {
            CheckOutcome::Passed => Ok(()),
            CheckOutcome::Enforced => {
                debug!(category = %category, "Check enforced");
                Err(FaultTriggered(category))
            },
            CheckOutcome::Suppressed => {
                debug!(category = %category, "Check suppressed, fault injected");
                Ok(())
            },
        }
    }

    /// Gate for undecodable bodies; the condition always holds
    pub fn invalid_payload(&self, reason: &str) -> Result<(), PayloadRejection> {
        self.check(FaultCategory::InvalidPayload, true)
            .map_err(|_| PayloadRejection::InvalidPayload(reason.to_string()))
    }

    /// Gate for a decoded body whose root is not an object
    pub fn unexpected_root_node(&self, unexpected: bool, found: &str) -> Result<(), PayloadRejection> {
        self.check(FaultCategory::UnexpectedRootNode, unexpected)
            .map_err(|_| PayloadRejection::UnexpectedRootShape {
                found: found.to_string(),
            })
    }

    /// Gate for bodies with fewer keys than the schema
    pub fn missing_keys(&self, expected: usize, actual: usize) -> Result<(), PayloadRejection> {
        self.check(FaultCategory::MissingKeys, actual < expected)
            .map_err(|_| PayloadRejection::MissingKeys { expected, actual })
    }

    /// Gate for bodies with more keys than the schema
    pub fn extra_keys(&self, expected: usize, actual: usize) -> Result<(), PayloadRejection> {
        self.check(FaultCategory::ExtraKeys, actual > expected)
            .map_err(|_| PayloadRejection::ExtraKeys { expected, actual })
    }

    /// Gate for a single field's type check
    pub fn wrong_data_type(&self, field: &str, valid: bool) -> Result<(), PayloadRejection> {
        self.check(FaultCategory::WrongDataTypes, !valid)
            .map_err(|_| PayloadRejection::WrongDataType {
                field: field.to_string(),
            })
    }

    /// Whether a delete of an existing record should be faked
    ///
    /// Unlike the other gates this never errors: when the category is
    /// enabled the caller reports success without deleting.
    pub fn broken_record_deletion(&self) -> bool {
        let category = FaultCategory::BrokenRecordDeletion;
        let broken = self.policy.is_enabled(category);
        let outcome = if broken {
            debug!(category = %category, "Deletion faked, record kept");
            CheckOutcome::Suppressed
        } else {
            CheckOutcome::Passed
        };
        self.context.record(category, outcome);
        broken
    }

    /// Get current statistics
    pub fn stats(&self) -> ChaosStats {
        self.context.stats()
    }

    /// Reset statistics
    pub fn reset(&self) {
        self.context.reset();
    }
}
