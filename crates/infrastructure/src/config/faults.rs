//! Fault injection configuration.

use std::collections::BTreeSet;

use application::FaultPolicy;
use domain::FaultCategory;
use serde::{Deserialize, Deserializer, Serialize};

/// Which fault categories are enabled
///
/// Validation categories listed here are enforced; leaving one out makes the
/// API silently accept payloads that fail it. Listing `broken_record_deletion`
/// makes deletes report success without removing the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultsConfig {
    /// Enabled category tags
    #[serde(
        default = "default_enabled",
        deserialize_with = "deserialize_categories"
    )]
    pub enabled: BTreeSet<FaultCategory>,
}

fn default_enabled() -> BTreeSet<FaultCategory> {
    FaultPolicy::strict().enabled().collect()
}

impl Default for FaultsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl FaultsConfig {
    /// Build the runtime policy table
    pub fn policy(&self) -> FaultPolicy {
        FaultPolicy::from_categories(self.enabled.iter().copied())
    }
}

/// Accepts a list of tags or one comma-separated string; blank entries are
/// skipped so an empty env var yields an empty set.
fn deserialize_categories<'de, D>(deserializer: D) -> Result<BTreeSet<FaultCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    let tags = match Tags::deserialize(deserializer)? {
        Tags::List(tags) => tags,
        Tags::Joined(joined) => joined.split(',').map(str::to_string).collect(),
    };

    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.parse::<FaultCategory>().map_err(serde::de::Error::custom))
        .collect()
}
