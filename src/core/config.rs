use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the registry documents live and how strictly to treat their
/// declared invariants at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub registry_path: PathBuf,
    pub metaregistry_path: PathBuf,
    pub collections_path: PathBuf,

    /// When set, a record pattern that fails to compile or a provider
    /// template without exactly one placeholder fails the whole load
    /// instead of degrading that record with a warning.
    pub strict_patterns: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::from_dir(".")
    }
}

impl RegistryConfig {
    /// Configuration pointing at the conventional document names inside
    /// one directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            registry_path: dir.join("registry.json"),
            metaregistry_path: dir.join("metaregistry.json"),
            collections_path: dir.join("collections.json"),
            strict_patterns: false,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict_patterns = true;
        self
    }
}
