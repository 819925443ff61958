use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

use super::Attributable;

/// The identifier placeholder used in provider URI templates.
pub const URI_PLACEHOLDER: &str = "$1";

/// A canonical registry record: one identifier namespace, its metadata, its
/// provider URI templates, and its cross-references into external registries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Canonical prefix, the unique lowercase key for this record.
    pub prefix: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Identifier pattern source. Compiled (anchored) at snapshot build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Casing hint for display, e.g. `GO` for the prefix `go`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<Url>,

    /// An example local identifier, for documentation and smoke checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(default)]
    pub deprecated: bool,

    /// URI templates in declaration order; the resource's own primary
    /// provider comes first, third-party providers after it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<Provider>,

    /// External registry key -> that registry's local identifier for this
    /// record. Insertion order is preserved so downstream passes are
    /// deterministic.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub mappings: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Attributable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<Attributable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Attributable>,
}

impl Resource {
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
            description: None,
            pattern: None,
            preferred_prefix: None,
            synonyms: Vec::new(),
            homepage: None,
            example: None,
            deprecated: false,
            providers: Vec::new(),
            mappings: IndexMap::new(),
            contributor: None,
            reviewer: None,
            contact: None,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_mapping(
        mut self,
        metaprefix: impl Into<String>,
        local_id: impl Into<String>,
    ) -> Self {
        self.mappings.insert(metaprefix.into(), local_id.into());
        self
    }

    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into());
        self
    }

    /// The primary URI template, i.e. the first available provider's.
    pub fn primary_uri_format(&self) -> Option<&str> {
        self.providers
            .iter()
            .find(|p| !p.unavailable)
            .map(|p| p.uri_format.as_str())
    }

    /// The URI prefix usable in a JSON-LD context: the primary template with
    /// its trailing placeholder stripped. Templates with the placeholder in
    /// the middle have no usable URI prefix.
    pub fn uri_prefix(&self) -> Option<&str> {
        self.primary_uri_format()?.strip_suffix(URI_PLACEHOLDER)
    }

    /// Compact identifier for this record and a local identifier.
    pub fn curie(&self, identifier: &str) -> String {
        format!("{}:{}", self.prefix, identifier)
    }
}

/// One URI template for a resource, keyed by a provider code such as
/// `obofoundry` or `miriam`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    /// Names this provider in resolver output; unique within a resource.
    pub code: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<Url>,

    /// Template containing exactly one `$1` placeholder.
    pub uri_format: String,

    /// Unavailable providers are kept for provenance but never resolved.
    #[serde(default)]
    pub unavailable: bool,
}

impl Provider {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        uri_format: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            homepage: None,
            uri_format: uri_format.into(),
            unavailable: false,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }
}
