//! # prefix-registry
//!
//! A lookup and normalization library for a registry of identifier-namespace
//! prefixes and the external registries that also catalog them.
//!
//! ## Features
//!
//! - **Resolution**: validate local identifiers against per-record patterns
//!   and expand provider URI templates into concrete URLs
//! - **Cross-registry mapping**: join two external registries through the
//!   canonical registry and partition their identifiers into matched,
//!   source-only, and target-only sets
//! - **Search**: ranked prefix search and autocomplete over prefixes, names,
//!   and synonyms
//! - **One immutable snapshot**: loaded once at startup, shared lock-free by
//!   any number of readers
//!
//! ## Quick Start
//!
//! ```rust
//! use prefix_registry::{Provider, RegistryManager, RegistrySnapshot, Resource};
//!
//! # fn example() -> prefix_registry::Result<()> {
//! let doid = Resource::new("doid", "Human Disease Ontology")
//!     .with_pattern(r"^\d+$")
//!     .with_provider(Provider::new(
//!         "obofoundry",
//!         "OBO Foundry",
//!         "http://purl.obolibrary.org/obo/DOID_$1",
//!     ));
//!
//! let snapshot = RegistrySnapshot::build(vec![doid], vec![], vec![], false)?;
//! let manager = RegistryManager::new(snapshot);
//!
//! let providers = manager.get_providers("DOID", "4325")?;
//! assert_eq!(
//!     providers["obofoundry"],
//!     "http://purl.obolibrary.org/obo/DOID_4325"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod core;
pub mod error;
pub mod mapping;
pub mod negotiate;
pub mod provider;
pub mod search;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use crate::core::{ContributorReport, RegistryConfig, RegistryManager};
pub use error::{RegistryError, Result};
pub use mapping::{MappingIndex, OverlapResult};
pub use negotiate::{negotiate, ContentType, NegotiationError};
pub use search::AutocompleteEntry;
pub use snapshot::{RegistrySnapshot, SnapshotLoader};
pub use types::{Attributable, Collection, ContributorRoles, Provider, Registry, Resource};
pub use validation::{ConfigWarning, PatternIndex};
