//! The registry overlap engine.
//!
//! Joins two external registries through the canonical registry: one linear
//! pass over all records partitions their external identifiers into matched
//! pairs, source-only, and target-only sets. Both registry keys are checked
//! eagerly so an unknown key never yields a half-computed result.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{RegistryError, Result};
use crate::types::{Registry, Resource};

/// The partition of two external registries' identifiers, joined through
/// the canonical registry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverlapResult {
    pub source: String,
    pub target: String,
    /// source local id -> target local id, in record declaration order.
    pub matched: IndexMap<String, String>,
    /// Local ids present under `source` whose record has no `target` mapping.
    pub source_only: BTreeSet<String>,
    /// Local ids present under `target` whose record has no `source` mapping.
    pub target_only: BTreeSet<String>,
}

impl OverlapResult {
    pub fn len_matched(&self) -> usize {
        self.matched.len()
    }

    pub fn len_source_only(&self) -> usize {
        self.source_only.len()
    }

    pub fn len_target_only(&self) -> usize {
        self.target_only.len()
    }
}

/// Compute the overlap between `source` and `target`.
///
/// Errors with [`RegistryError::UnknownRegistryKey`] before any iteration
/// when either key is absent from the metaregistry.
pub fn overlap<'a>(
    resources: impl IntoIterator<Item = &'a Resource>,
    metaregistry: &IndexMap<String, Registry>,
    source: &str,
    target: &str,
) -> Result<OverlapResult> {
    if !metaregistry.contains_key(source) {
        return Err(RegistryError::unknown_registry_key(source));
    }
    if !metaregistry.contains_key(target) {
        return Err(RegistryError::unknown_registry_key(target));
    }

    let mut matched = IndexMap::new();
    let mut source_only = BTreeSet::new();
    let mut target_only = BTreeSet::new();
    for resource in resources {
        let source_id = resource.mappings.get(source);
        let target_id = resource.mappings.get(target);
        match (source_id, target_id) {
            (Some(source_id), Some(target_id)) => {
                matched.insert(source_id.clone(), target_id.clone());
            }
            (Some(source_id), None) => {
                source_only.insert(source_id.clone());
            }
            (None, Some(target_id)) => {
                target_only.insert(target_id.clone());
            }
            (None, None) => {}
        }
    }

    Ok(OverlapResult {
        source: source.to_string(),
        target: target.to_string(),
        matched,
        source_only,
        target_only,
    })
}
