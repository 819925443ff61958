//! Provider URL resolution.
//!
//! Expands a record's URI templates into concrete URLs by substituting the
//! local identifier for the single `$1` placeholder. Output order is the
//! declaration order of the providers (primary first), which callers rely on
//! for deterministic display.

use indexmap::IndexMap;

use crate::types::resource::URI_PLACEHOLDER;
use crate::types::Resource;

/// Expand every available provider template of `resource` with `identifier`.
///
/// Providers flagged unavailable are skipped. An empty map is a normal
/// result, not an error; callers decide what that means for them.
pub fn resolve(resource: &Resource, identifier: &str) -> IndexMap<String, String> {
    let mut urls = IndexMap::with_capacity(resource.providers.len());
    for provider in &resource.providers {
        if provider.unavailable {
            continue;
        }
        urls.insert(
            provider.code.clone(),
            provider.uri_format.replacen(URI_PLACEHOLDER, identifier, 1),
        );
    }
    urls
}
