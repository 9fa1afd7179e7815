//! Chaos context for tracking checkpoint outcomes.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::FaultCategory;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The triggering condition did not hold
    Passed,
    /// The condition held and an error was signalled
    Enforced,
    /// The condition held but the category let it through (fault injected)
    Suppressed,
}

/// Counters for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Checkpoint evaluations
    pub checks: u64,
    /// Evaluations that signalled an error
    pub enforced: u64,
    /// Evaluations that injected a fault
    pub faults_injected: u64,
}

/// Snapshot of fault injection statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaosStats {
    /// Total checkpoint evaluations
    pub checks: u64,
    /// Total evaluations that signalled an error
    pub enforced: u64,
    /// Total injected faults
    pub faults_injected: u64,
    /// Breakdown per category
    pub by_category: BTreeMap<FaultCategory, CategoryStats>,
}

impl ChaosStats {
    /// Fraction of checks that injected a fault
    #[allow(clippy::cast_precision_loss)]
    pub fn fault_rate(&self) -> f64 {
        if self.checks == 0 {
            0.0
        } else {
            self.faults_injected as f64 / self.checks as f64
        }
    }
}

#[derive(Debug, Default)]
struct Counters {
    checks: AtomicU64,
    enforced: AtomicU64,
    faults_injected: AtomicU64,
}

impl Counters {
    fn snapshot(&self) -> CategoryStats {
        CategoryStats {
            checks: self.checks.load(Ordering::Relaxed),
            enforced: self.enforced.load(Ordering::Relaxed),
            faults_injected: self.faults_injected.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.checks.store(0, Ordering::Relaxed);
        self.enforced.store(0, Ordering::Relaxed);
        self.faults_injected.store(0, Ordering::Relaxed);
    }
}

/// Shared, lock-free record of checkpoint outcomes
#[derive(Debug, Default)]
pub struct ChaosContext {
    per_category: [Counters; FaultCategory::ALL.len()],
}

impl ChaosContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one checkpoint
    pub fn record(&self, category: FaultCategory, outcome: CheckOutcome) {
        let counters = &self.per_category[slot(category)];
        counters.checks.fetch_add(1, Ordering::Relaxed);
        match outcome {
            CheckOutcome::Passed => {},
            CheckOutcome::Enforced => {
                counters.enforced.fetch_add(1, Ordering::Relaxed);
            },
            CheckOutcome::Suppressed => {
                counters.faults_injected.fetch_add(1, Ordering::Relaxed);
            },
        }
    }

    /// Take a snapshot of all counters
    pub fn stats(&self) -> ChaosStats {
        let mut stats = ChaosStats::default();
        for category in FaultCategory::ALL {
            let snapshot = self.per_category[slot(category)].snapshot();
            stats.checks += snapshot.checks;
            stats.enforced += snapshot.enforced;
            stats.faults_injected += snapshot.faults_injected;
            stats.by_category.insert(category, snapshot);
        }
        stats
    }

    /// Zero all counters
    pub fn reset(&self) {
        for counters in &self.per_category {
            counters.reset();
        }
    }
}

const fn slot(category: FaultCategory) -> usize {
    category as usize
}
