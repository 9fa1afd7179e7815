//! Record identifier assigned by the store

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Sequential identifier of a stored record
///
/// Ids start at 1 and are never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// The first id handed out by an empty store
    pub const FIRST: Self = Self(1);

    /// Wrap a raw id
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse a record id from a path segment
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not an unsigned decimal integer.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidRecordId(s.to_string()))
    }

    /// The id following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
