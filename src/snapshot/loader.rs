//! Snapshot construction from static configuration on disk.
//!
//! The only I/O in the crate: three JSON documents (registry, metaregistry,
//! collections) are read once at startup and turned into a
//! [`RegistrySnapshot`]. Everything downstream is pure in-memory
//! computation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::core::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::snapshot::RegistrySnapshot;
use crate::types::{Collection, Registry, Resource};

pub struct SnapshotLoader {
    config: RegistryConfig,
}

impl SnapshotLoader {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }

    /// Read all three documents and build the snapshot. The collections
    /// document is optional on disk; a missing file means no collections.
    pub fn load(&self) -> Result<RegistrySnapshot> {
        let resources: Vec<Resource> = read_json(&self.config.registry_path)?;
        let metaregistry: Vec<Registry> = read_json(&self.config.metaregistry_path)?;
        let collections: Vec<Collection> = if self.config.collections_path.exists() {
            read_json(&self.config.collections_path)?
        } else {
            Vec::new()
        };

        info!(
            resources = resources.len(),
            registries = metaregistry.len(),
            collections = collections.len(),
            "loaded registry documents"
        );

        RegistrySnapshot::build(
            resources,
            metaregistry,
            collections,
            self.config.strict_patterns,
        )
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|err| RegistryError::Load {
        message: format!("cannot open {}: {err}", path.display()),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|err| RegistryError::Load {
        message: format!("cannot parse {}: {err}", path.display()),
    })
}
