//! The registry manager: the explicit read-only context object threaded
//! through every call. Wraps the shared snapshot and composes the component
//! engines into the operations an HTTP layer consumes.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::mapping::{self, OverlapResult};
use crate::provider;
use crate::search::{self, AutocompleteEntry};
use crate::snapshot::{RegistrySnapshot, SnapshotLoader};
use crate::types::{Attributable, Collection, ContributorRoles, Registry, Resource};

/// A contributor and the roles derived for them by scanning the snapshot.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContributorReport {
    pub contributor: Attributable,
    #[serde(flatten)]
    pub roles: ContributorRoles,
}

#[derive(Clone)]
pub struct RegistryManager {
    snapshot: Arc<RegistrySnapshot>,
}

impl RegistryManager {
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    pub fn from_arc(snapshot: Arc<RegistrySnapshot>) -> Self {
        Self { snapshot }
    }

    /// Load the documents named by `config` and build a manager around the
    /// resulting snapshot.
    pub fn load(config: RegistryConfig) -> Result<Self> {
        Ok(Self::new(SnapshotLoader::new(config).load()?))
    }

    pub fn snapshot(&self) -> &RegistrySnapshot {
        &self.snapshot
    }

    /// All canonical records, in declaration order.
    pub fn resources(&self) -> &IndexMap<String, Resource> {
        self.snapshot.resources()
    }

    /// Case- and synonym-normalized record lookup.
    pub fn get_resource(&self, prefix: &str) -> Option<&Resource> {
        self.snapshot.get_resource(prefix)
    }

    /// Resolve raw input to the canonical prefix.
    pub fn normalize_prefix(&self, raw: &str) -> Option<&str> {
        self.snapshot.normalize_prefix(raw)
    }

    /// Validate an identifier against its record and expand all provider
    /// templates.
    ///
    /// The three failure modes stay distinct for the caller: unknown prefix,
    /// identifier failing the record's pattern, and a valid identifier with
    /// no provider configured.
    pub fn get_providers(&self, prefix: &str, identifier: &str) -> Result<IndexMap<String, String>> {
        let resource = self
            .get_resource(prefix)
            .ok_or_else(|| RegistryError::prefix_not_found(prefix))?;

        if !self.snapshot.patterns().validate(resource, identifier) {
            return Err(RegistryError::InvalidIdentifier {
                prefix: resource.prefix.clone(),
                identifier: identifier.to_string(),
                pattern: resource.pattern.clone().unwrap_or_default(),
            });
        }

        let providers = provider::resolve(resource, identifier);
        if providers.is_empty() {
            return Err(RegistryError::NoProvidersAvailable {
                prefix: resource.prefix.clone(),
                identifier: identifier.to_string(),
            });
        }
        Ok(providers)
    }

    pub fn metaregistry(&self) -> &IndexMap<String, Registry> {
        self.snapshot.metaregistry()
    }

    pub fn get_registry(&self, metaprefix: &str) -> Option<&Registry> {
        self.snapshot.registry(metaprefix)
    }

    /// Canonical prefix -> external local identifier, for bulk export.
    pub fn get_registry_map(&self, metaprefix: &str) -> Result<&IndexMap<String, String>> {
        self.snapshot.mapping_index().registry_map(metaprefix)
    }

    /// External local identifier -> canonical prefix.
    pub fn get_registry_inverse_map(
        &self,
        metaprefix: &str,
    ) -> Result<&IndexMap<String, String>> {
        self.snapshot.mapping_index().lookup(metaprefix)
    }

    /// The records that expose a mapping to the given external registry.
    pub fn get_registry_subset(&self, metaprefix: &str) -> Result<IndexMap<&str, &Resource>> {
        if self.snapshot.registry(metaprefix).is_none() {
            return Err(RegistryError::unknown_registry_key(metaprefix));
        }
        Ok(self
            .snapshot
            .resources()
            .iter()
            .filter(|(_, resource)| resource.mappings.contains_key(metaprefix))
            .map(|(prefix, resource)| (prefix.as_str(), resource))
            .collect())
    }

    /// Direct link into the external registry's own record page, when that
    /// registry declares a provider template.
    pub fn get_registry_record_url(
        &self,
        metaprefix: &str,
        local_id: &str,
    ) -> Result<Option<String>> {
        let registry = self
            .snapshot
            .registry(metaprefix)
            .ok_or_else(|| RegistryError::unknown_registry_key(metaprefix))?;
        Ok(registry.record_url(local_id))
    }

    /// Overlap between two external registries, joined through the
    /// canonical registry.
    pub fn overlap(&self, source: &str, target: &str) -> Result<OverlapResult> {
        mapping::overlap(
            self.snapshot.resources().values(),
            self.snapshot.metaregistry(),
            source,
            target,
        )
    }

    /// Ranked full-record search.
    pub fn search(&self, query: &str) -> Vec<&Resource> {
        search::search(self.snapshot.resources().values(), query)
    }

    /// Ranked (prefix, name) suggestions.
    pub fn autocomplete(&self, query: &str) -> Vec<AutocompleteEntry> {
        search::autocomplete(self.snapshot.resources().values(), query)
    }

    pub fn collections(&self) -> &IndexMap<String, Collection> {
        self.snapshot.collections()
    }

    pub fn get_collection(&self, identifier: &str) -> Option<&Collection> {
        self.snapshot.collection(identifier)
    }

    /// The collection's JSON-LD-style context: member prefix -> URI prefix.
    /// Members without a usable URI prefix are skipped.
    pub fn get_collection_context(&self, identifier: &str) -> Result<IndexMap<String, String>> {
        let collection =
            self.get_collection(identifier)
                .ok_or_else(|| RegistryError::CollectionNotFound {
                    identifier: identifier.to_string(),
                })?;
        let mut context = IndexMap::new();
        for prefix in &collection.resources {
            let Some(resource) = self.snapshot.resource(prefix) else {
                continue;
            };
            if let Some(uri_prefix) = resource.uri_prefix() {
                context.insert(resource.prefix.clone(), uri_prefix.to_string());
            }
        }
        Ok(context)
    }

    /// An ad-hoc context over arbitrary raw prefixes. Values may be
    /// comma-separated lists; unknown prefixes and records without a usable
    /// URI prefix are silently skipped.
    pub fn ad_hoc_context<I, S>(&self, values: I) -> IndexMap<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut context = IndexMap::new();
        for value in values {
            for raw in value.as_ref().split(',') {
                let Some(resource) = self.get_resource(raw) else {
                    continue;
                };
                if let Some(uri_prefix) = resource.uri_prefix() {
                    context.insert(resource.prefix.clone(), uri_prefix.to_string());
                }
            }
        }
        context
    }

    /// Everyone attributable in the snapshot, keyed by ORCID.
    pub fn contributors(&self) -> IndexMap<String, Attributable> {
        self.snapshot.contributors()
    }

    /// One contributor and their derived role sets.
    pub fn get_contributor(&self, orcid: &str) -> Result<ContributorReport> {
        let contributor = self
            .contributors()
            .shift_remove(orcid)
            .ok_or_else(|| RegistryError::ContributorNotFound {
                orcid: orcid.to_string(),
            })?;
        Ok(ContributorReport {
            contributor,
            roles: self.snapshot.contributor_roles(orcid),
        })
    }
}
