//! Fault categories that can be switched on or off per deployment

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A category of correct API behavior that may be deliberately disabled
///
/// For the five payload categories, *enabled* means the check is enforced and a
/// non-conformant payload is rejected. `BrokenRecordDeletion` is the odd one out:
/// enabling it activates the fault, so deletes report success without removing
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultCategory {
    /// Request body could not be decoded
    InvalidPayload,
    /// Decoded body is not a key/value mapping
    #[serde(rename = "unexpected_payload_root_node")]
    UnexpectedRootNode,
    /// Body carries fewer keys than the schema declares
    #[serde(rename = "payload_missing_keys")]
    MissingKeys,
    /// Body carries more keys than the schema declares
    #[serde(rename = "payload_extra_keys")]
    ExtraKeys,
    /// A field value does not match its declared type
    #[serde(rename = "payload_wrong_data_types")]
    WrongDataTypes,
    /// Deletes report success but keep the record
    BrokenRecordDeletion,
}

impl FaultCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 6] = [
        Self::InvalidPayload,
        Self::UnexpectedRootNode,
        Self::MissingKeys,
        Self::ExtraKeys,
        Self::WrongDataTypes,
        Self::BrokenRecordDeletion,
    ];

    /// Configuration tag for this category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPayload => "invalid_payload",
            Self::UnexpectedRootNode => "unexpected_payload_root_node",
            Self::MissingKeys => "payload_missing_keys",
            Self::ExtraKeys => "payload_extra_keys",
            Self::WrongDataTypes => "payload_wrong_data_types",
            Self::BrokenRecordDeletion => "broken_record_deletion",
        }
    }

    /// Whether enabling the category switches a check on (as opposed to a fault)
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::BrokenRecordDeletion)
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaultCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == tag)
            .ok_or_else(|| DomainError::UnknownFaultCategory(tag.to_string()))
    }
}
