//! Fault policy: the table of enabled fault categories.

use std::collections::BTreeSet;

use domain::FaultCategory;

/// Which fault categories are enabled
///
/// For validation categories, enabled means the check is enforced. For
/// `BrokenRecordDeletion`, enabled means deletes are faked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultPolicy {
    enabled: BTreeSet<FaultCategory>,
}

impl Default for FaultPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl FaultPolicy {
    /// A conformant API: every validation enforced, deletion working
    pub fn strict() -> Self {
        Self::from_categories(
            FaultCategory::ALL
                .into_iter()
                .filter(FaultCategory::is_validation),
        )
    }

    /// Nothing enabled: every validation suppressed, deletion working
    pub fn permissive() -> Self {
        Self {
            enabled: BTreeSet::new(),
        }
    }

    /// Policy with exactly the given categories enabled
    pub fn from_categories(categories: impl IntoIterator<Item = FaultCategory>) -> Self {
        Self {
            enabled: categories.into_iter().collect(),
        }
    }

    /// Enable a category
    #[must_use]
    pub fn with(mut self, category: FaultCategory) -> Self {
        self.enabled.insert(category);
        self
    }

    /// Disable a category
    #[must_use]
    pub fn without(mut self, category: FaultCategory) -> Self {
        self.enabled.remove(&category);
        self
    }

    /// Check whether a category is enabled
    pub fn is_enabled(&self, category: FaultCategory) -> bool {
        self.enabled.contains(&category)
    }

    /// Enabled categories in declaration order
    pub fn enabled(&self) -> impl Iterator<Item = FaultCategory> + '_ {
        self.enabled.iter().copied()
    }

    /// Disabled categories in declaration order
    pub fn disabled(&self) -> impl Iterator<Item = FaultCategory> + '_ {
        FaultCategory::ALL
            .into_iter()
            .filter(|category| !self.enabled.contains(category))
    }
}
