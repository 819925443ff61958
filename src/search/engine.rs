//! Prefix search and autocomplete.
//!
//! Case-insensitive substring matching over canonical prefixes, display
//! names, and synonyms, ranked by match tier: exact prefix, prefix
//! starts-with, name starts-with, then substring anywhere. Within a tier,
//! results are alphabetical by canonical prefix. The whole candidate set is
//! the registry itself, so a ranked linear scan is all this needs.

use serde::Serialize;

use crate::types::Resource;

/// One autocomplete suggestion.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AutocompleteEntry {
    pub prefix: String,
    pub name: String,
}

/// Match tiers, lower is better. `None` means no match.
fn match_tier(resource: &Resource, query: &str) -> Option<u8> {
    let prefix = resource.prefix.to_lowercase();
    let name = resource.name.to_lowercase();
    if prefix == query {
        return Some(0);
    }
    if prefix.starts_with(query) {
        return Some(1);
    }
    if name.starts_with(query) {
        return Some(2);
    }
    if prefix.contains(query)
        || name.contains(query)
        || resource
            .synonyms
            .iter()
            .any(|synonym| synonym.to_lowercase().contains(query))
    {
        return Some(3);
    }
    None
}

/// Rank all matching records, most relevant first. An empty result is a
/// normal outcome. Pure function of the snapshot, so repeated calls with
/// the same query return identical sequences.
pub fn search<'a>(
    resources: impl IntoIterator<Item = &'a Resource>,
    query: &str,
) -> Vec<&'a Resource> {
    let query = query.to_lowercase();
    let mut hits: Vec<(u8, &Resource)> = resources
        .into_iter()
        .filter_map(|resource| match_tier(resource, &query).map(|tier| (tier, resource)))
        .collect();
    hits.sort_by(|(tier_a, a), (tier_b, b)| (tier_a, &a.prefix).cmp(&(tier_b, &b.prefix)));
    hits.into_iter().map(|(_, resource)| resource).collect()
}

/// Autocomplete suggestions for a partial prefix. A record whose prefix
/// exactly equals the query comes first when one exists; exact prefix
/// equality is unique, so tier ordering already guarantees that.
pub fn autocomplete<'a>(
    resources: impl IntoIterator<Item = &'a Resource>,
    query: &str,
) -> Vec<AutocompleteEntry> {
    search(resources, query)
        .into_iter()
        .map(|resource| AutocompleteEntry {
            prefix: resource.prefix.clone(),
            name: resource.name.clone(),
        })
        .collect()
}
