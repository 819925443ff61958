use serde::{Deserialize, Serialize};

use super::Attributable;

/// A named, ordered set of canonical prefixes with its own metadata, used
/// for export contexts. Read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Stable string key, e.g. a zero-padded collection number.
    pub identifier: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Canonical prefixes in curated order.
    pub resources: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Attributable>,
}
