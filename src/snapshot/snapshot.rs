//! The immutable in-memory registry snapshot.
//!
//! Built once at process start; every component reads from it and nothing
//! mutates it afterwards, so arbitrarily many reader threads may share it
//! (typically behind an `Arc`) without locking. Hot reload, if a host ever
//! wants it, is build-aside-then-swap of that `Arc`.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::warn;

use crate::error::{RegistryError, Result};
use crate::mapping::MappingIndex;
use crate::types::resource::URI_PLACEHOLDER;
use crate::types::{Attributable, Collection, ContributorRoles, Registry, Resource};
use crate::validation::{ConfigWarning, PatternIndex};

pub struct RegistrySnapshot {
    resources: IndexMap<String, Resource>,
    metaregistry: IndexMap<String, Registry>,
    collections: IndexMap<String, Collection>,
    patterns: PatternIndex,
    /// Lowercased prefix, preferred prefix, or synonym -> canonical prefix.
    normalization: HashMap<String, String>,
    mapping_index: MappingIndex,
    warnings: Vec<ConfigWarning>,
}

impl RegistrySnapshot {
    /// Assemble a snapshot from loaded entities.
    ///
    /// Enforces the load-time invariants: canonical prefixes are unique,
    /// provider templates carry exactly one placeholder, and patterns
    /// compile. In strict mode invariant violations are hard errors; in
    /// lenient mode they are logged, recorded as warnings, and degraded
    /// (bad pattern -> always-pass checks, bad template -> provider marked
    /// unavailable).
    pub fn build(
        resources: Vec<Resource>,
        metaregistry: Vec<Registry>,
        collections: Vec<Collection>,
        strict: bool,
    ) -> Result<Self> {
        let mut warnings = Vec::new();

        let mut by_prefix: IndexMap<String, Resource> = IndexMap::with_capacity(resources.len());
        for mut resource in resources {
            if by_prefix.contains_key(&resource.prefix) {
                return Err(RegistryError::Load {
                    message: format!("duplicate canonical prefix: {}", resource.prefix),
                });
            }
            check_provider_templates(&mut resource, strict, &mut warnings)?;
            by_prefix.insert(resource.prefix.clone(), resource);
        }

        let mut meta_by_prefix: IndexMap<String, Registry> =
            IndexMap::with_capacity(metaregistry.len());
        for registry in metaregistry {
            if meta_by_prefix.contains_key(&registry.metaprefix) {
                return Err(RegistryError::Load {
                    message: format!("duplicate metaprefix: {}", registry.metaprefix),
                });
            }
            meta_by_prefix.insert(registry.metaprefix.clone(), registry);
        }

        let mut coll_by_id: IndexMap<String, Collection> =
            IndexMap::with_capacity(collections.len());
        for collection in collections {
            if coll_by_id.contains_key(&collection.identifier) {
                return Err(RegistryError::Load {
                    message: format!("duplicate collection identifier: {}", collection.identifier),
                });
            }
            coll_by_id.insert(collection.identifier.clone(), collection);
        }

        let patterns = PatternIndex::build(by_prefix.values(), strict)?;
        warnings.extend(patterns.warnings().iter().cloned());

        // Canonical prefixes first so no alias can shadow one.
        let mut normalization = HashMap::new();
        for prefix in by_prefix.keys() {
            normalization.insert(prefix.to_lowercase(), prefix.clone());
        }
        for (prefix, resource) in &by_prefix {
            if let Some(preferred) = &resource.preferred_prefix {
                normalization
                    .entry(preferred.to_lowercase())
                    .or_insert_with(|| prefix.clone());
            }
            for synonym in &resource.synonyms {
                normalization
                    .entry(synonym.to_lowercase())
                    .or_insert_with(|| prefix.clone());
            }
        }

        let mapping_index = MappingIndex::build(by_prefix.values(), meta_by_prefix.values());

        Ok(Self {
            resources: by_prefix,
            metaregistry: meta_by_prefix,
            collections: coll_by_id,
            patterns,
            normalization,
            mapping_index,
            warnings,
        })
    }

    pub fn resources(&self) -> &IndexMap<String, Resource> {
        &self.resources
    }

    /// Exact lookup by canonical prefix.
    pub fn resource(&self, prefix: &str) -> Option<&Resource> {
        self.resources.get(prefix)
    }

    /// Resolve raw user input (any casing, preferred form, or registered
    /// synonym) to the canonical prefix.
    pub fn normalize_prefix(&self, raw: &str) -> Option<&str> {
        self.normalization
            .get(&raw.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Case- and synonym-normalized record lookup.
    pub fn get_resource(&self, raw: &str) -> Option<&Resource> {
        self.resource(self.normalize_prefix(raw)?)
    }

    pub fn metaregistry(&self) -> &IndexMap<String, Registry> {
        &self.metaregistry
    }

    pub fn registry(&self, metaprefix: &str) -> Option<&Registry> {
        self.metaregistry.get(metaprefix)
    }

    pub fn collections(&self) -> &IndexMap<String, Collection> {
        &self.collections
    }

    pub fn collection(&self, identifier: &str) -> Option<&Collection> {
        self.collections.get(identifier)
    }

    pub fn patterns(&self) -> &PatternIndex {
        &self.patterns
    }

    pub fn mapping_index(&self) -> &MappingIndex {
        &self.mapping_index
    }

    /// Configuration problems found at build time, for operator surfacing.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Everyone attributable anywhere in the snapshot, keyed by ORCID.
    /// Recomputed on each call; the snapshot never changes underneath it.
    pub fn contributors(&self) -> IndexMap<String, Attributable> {
        let mut people: IndexMap<String, Attributable> = IndexMap::new();
        for resource in self.resources.values() {
            note_person(&mut people, resource.contributor.as_ref());
            note_person(&mut people, resource.reviewer.as_ref());
            note_person(&mut people, resource.contact.as_ref());
        }
        for registry in self.metaregistry.values() {
            note_person(&mut people, registry.contact.as_ref());
        }
        for collection in self.collections.values() {
            for author in &collection.authors {
                note_person(&mut people, Some(author));
            }
        }
        people
    }

    /// Derived role sets for one ORCID, computed by scanning the snapshot.
    pub fn contributor_roles(&self, orcid: &str) -> ContributorRoles {
        let has_orcid = |person: &Option<Attributable>| {
            person
                .as_ref()
                .and_then(|p| p.orcid.as_deref())
                .is_some_and(|o| o == orcid)
        };
        let mut roles = ContributorRoles::default();
        for (prefix, resource) in &self.resources {
            if has_orcid(&resource.contributor) {
                roles.prefix_contributions.insert(prefix.clone());
            }
            if has_orcid(&resource.reviewer) {
                roles.prefix_reviews.insert(prefix.clone());
            }
            if has_orcid(&resource.contact) {
                roles.prefix_contacts.insert(prefix.clone());
            }
        }
        for (metaprefix, registry) in &self.metaregistry {
            if has_orcid(&registry.contact) {
                roles.registries.insert(metaprefix.clone());
            }
        }
        for (identifier, collection) in &self.collections {
            if collection
                .authors
                .iter()
                .any(|author| author.orcid.as_deref() == Some(orcid))
            {
                roles.collections.insert(identifier.clone());
            }
        }
        roles
    }
}

fn note_person(people: &mut IndexMap<String, Attributable>, person: Option<&Attributable>) {
    let Some(person) = person else { return };
    let Some(orcid) = &person.orcid else { return };
    people
        .entry(orcid.clone())
        .or_insert_with(|| person.clone());
}

/// Every provider template must contain exactly one identifier placeholder.
/// Lenient mode marks a violating provider unavailable and records a
/// warning; strict mode fails the build.
fn check_provider_templates(
    resource: &mut Resource,
    strict: bool,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<()> {
    for provider in &mut resource.providers {
        if provider.uri_format.matches(URI_PLACEHOLDER).count() == 1 {
            continue;
        }
        let message = format!(
            "provider {} template {:?} must contain exactly one {} placeholder",
            provider.code, provider.uri_format, URI_PLACEHOLDER
        );
        if strict {
            return Err(RegistryError::Configuration {
                prefix: resource.prefix.clone(),
                message,
            });
        }
        warn!(prefix = %resource.prefix, provider = %provider.code, "{message}");
        warnings.push(ConfigWarning {
            prefix: resource.prefix.clone(),
            message,
        });
        provider.unavailable = true;
    }
    Ok(())
}
