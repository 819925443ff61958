use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("prefix not found: {prefix}")]
    PrefixNotFound { prefix: String },

    #[error("collection not found: {identifier}")]
    CollectionNotFound { identifier: String },

    #[error("contributor not found: {orcid}")]
    ContributorNotFound { orcid: String },

    #[error("unknown registry key: {metaprefix}")]
    UnknownRegistryKey { metaprefix: String },

    #[error("invalid identifier {identifier:?} for prefix {prefix} (pattern {pattern})")]
    InvalidIdentifier {
        prefix: String,
        identifier: String,
        pattern: String,
    },

    #[error("no providers available for {prefix}:{identifier}")]
    NoProvidersAvailable { prefix: String, identifier: String },

    #[error("configuration error for {prefix}: {message}")]
    Configuration { prefix: String, message: String },

    #[error("load error: {message}")]
    Load { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    pub fn prefix_not_found(prefix: impl Into<String>) -> Self {
        Self::PrefixNotFound {
            prefix: prefix.into(),
        }
    }

    pub fn unknown_registry_key(metaprefix: impl Into<String>) -> Self {
        Self::UnknownRegistryKey {
            metaprefix: metaprefix.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
