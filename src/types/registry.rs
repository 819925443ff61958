use serde::{Deserialize, Serialize};
use url::Url;

use super::Attributable;
use crate::types::resource::URI_PLACEHOLDER;

/// A metaregistry entry: one external registry that independently catalogs
/// namespaces also known to the canonical registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registry {
    /// Unique key for this external registry, e.g. `n2t` or `miriam`.
    pub metaprefix: String,
    pub name: String,
    pub homepage: Url,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Template for a direct link to this registry's own record page,
    /// with a single `$1` placeholder for the registry's local identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_uri_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Attributable>,
}

impl Registry {
    /// Direct link to this registry's record page for a local identifier,
    /// when the registry declares a provider template.
    pub fn record_url(&self, local_id: &str) -> Option<String> {
        self.provider_uri_format
            .as_ref()
            .map(|template| template.replacen(URI_PLACEHOLDER, local_id, 1))
    }
}
