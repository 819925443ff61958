//! The cross-registry mapping index.
//!
//! For each external registry key the index holds both directions of the
//! canonical join: external local identifier -> canonical prefix, and
//! canonical prefix -> external local identifier. Built once from the
//! snapshot's records in declaration order; duplicate external identifiers
//! under one key resolve last-write-wins, which declaration order makes
//! deterministic.

use indexmap::IndexMap;

use crate::error::{RegistryError, Result};
use crate::types::{Registry, Resource};

#[derive(Debug, Clone, Default)]
pub struct MappingIndex {
    /// metaprefix -> external local id -> canonical prefix
    forward: IndexMap<String, IndexMap<String, String>>,
    /// metaprefix -> canonical prefix -> external local id
    reverse: IndexMap<String, IndexMap<String, String>>,
}

impl MappingIndex {
    /// Build the index over all records. Every metaregistry key gets an
    /// entry even when no record maps to it, so lookups can distinguish an
    /// empty registry from an unknown one.
    pub fn build<'a>(
        resources: impl IntoIterator<Item = &'a Resource>,
        metaregistry: impl IntoIterator<Item = &'a Registry>,
    ) -> Self {
        let mut forward: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        let mut reverse: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        for registry in metaregistry {
            forward.entry(registry.metaprefix.clone()).or_default();
            reverse.entry(registry.metaprefix.clone()).or_default();
        }
        for resource in resources {
            for (metaprefix, local_id) in &resource.mappings {
                // Mappings to registries absent from the metaregistry are
                // dropped here; lookups for such keys are UnknownRegistryKey.
                if let (Some(by_external), Some(by_prefix)) =
                    (forward.get_mut(metaprefix), reverse.get_mut(metaprefix))
                {
                    by_external.insert(local_id.clone(), resource.prefix.clone());
                    by_prefix.insert(resource.prefix.clone(), local_id.clone());
                }
            }
        }
        Self { forward, reverse }
    }

    /// External local identifier -> canonical prefix, for one registry.
    pub fn lookup(&self, metaprefix: &str) -> Result<&IndexMap<String, String>> {
        self.forward
            .get(metaprefix)
            .ok_or_else(|| RegistryError::unknown_registry_key(metaprefix))
    }

    /// Canonical prefix -> external local identifier, for one registry.
    /// This is the projection behind bulk registry-map exports.
    pub fn registry_map(&self, metaprefix: &str) -> Result<&IndexMap<String, String>> {
        self.reverse
            .get(metaprefix)
            .ok_or_else(|| RegistryError::unknown_registry_key(metaprefix))
    }

    /// The external local identifier one canonical record has under one
    /// registry, when it declares one.
    pub fn lookup_reverse(&self, canonical_prefix: &str, metaprefix: &str) -> Option<&str> {
        self.reverse
            .get(metaprefix)?
            .get(canonical_prefix)
            .map(String::as_str)
    }
}
