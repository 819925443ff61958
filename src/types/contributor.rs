use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A person attributable for registry content, keyed by ORCID when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributable {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Attributable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            orcid: None,
            email: None,
            github: None,
        }
    }

    pub fn with_orcid(mut self, orcid: impl Into<String>) -> Self {
        self.orcid = Some(orcid.into());
        self
    }
}

/// Derived role sets for one contributor. Computed by scanning the snapshot
/// on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContributorRoles {
    pub prefix_contributions: BTreeSet<String>,
    pub prefix_reviews: BTreeSet<String>,
    pub prefix_contacts: BTreeSet<String>,
    pub registries: BTreeSet<String>,
    pub collections: BTreeSet<String>,
}

impl ContributorRoles {
    pub fn is_empty(&self) -> bool {
        self.prefix_contributions.is_empty()
            && self.prefix_reviews.is_empty()
            && self.prefix_contacts.is_empty()
            && self.registries.is_empty()
            && self.collections.is_empty()
    }
}
