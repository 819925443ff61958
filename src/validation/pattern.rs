//! Identifier pattern validation.
//!
//! Patterns are compiled once at snapshot build and anchored to the full
//! string, so `validate` is a cheap regex match afterwards. A record whose
//! pattern fails to compile keeps working: its checks degrade to always-pass
//! and the failure is surfaced as a [`ConfigWarning`].

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::error::{RegistryError, Result};
use crate::types::Resource;

/// A load-time configuration problem attached to one record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigWarning {
    pub prefix: String,
    pub message: String,
}

enum Compiled {
    Ok(Regex),
    /// Pattern source failed to compile; checks for this record always pass.
    Degraded,
}

/// Compiled patterns for every record that declares one.
pub struct PatternIndex {
    patterns: HashMap<String, Compiled>,
    warnings: Vec<ConfigWarning>,
}

impl PatternIndex {
    /// Compile the pattern of every record. In strict mode a compile failure
    /// is a hard [`RegistryError::Configuration`]; otherwise it is logged,
    /// recorded, and the record degrades to always-pass.
    pub fn build<'a>(
        resources: impl IntoIterator<Item = &'a Resource>,
        strict: bool,
    ) -> Result<Self> {
        let mut patterns = HashMap::new();
        let mut warnings = Vec::new();
        for resource in resources {
            let Some(source) = resource.pattern.as_deref() else {
                continue;
            };
            match Regex::new(&anchor(source)) {
                Ok(regex) => {
                    patterns.insert(resource.prefix.clone(), Compiled::Ok(regex));
                }
                Err(err) => {
                    if strict {
                        return Err(RegistryError::Configuration {
                            prefix: resource.prefix.clone(),
                            message: format!("pattern {source:?} failed to compile: {err}"),
                        });
                    }
                    warn!(
                        prefix = %resource.prefix,
                        pattern = %source,
                        %err,
                        "pattern failed to compile, identifier checks degrade to always-pass"
                    );
                    warnings.push(ConfigWarning {
                        prefix: resource.prefix.clone(),
                        message: format!("pattern {source:?} failed to compile: {err}"),
                    });
                    patterns.insert(resource.prefix.clone(), Compiled::Degraded);
                }
            }
        }
        Ok(Self { patterns, warnings })
    }

    /// Whether `identifier` satisfies the record's pattern. Records without
    /// a pattern, and records whose pattern degraded at build time, accept
    /// every identifier.
    pub fn validate(&self, resource: &Resource, identifier: &str) -> bool {
        match self.patterns.get(&resource.prefix) {
            Some(Compiled::Ok(regex)) => regex.is_match(identifier),
            Some(Compiled::Degraded) | None => true,
        }
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

/// Anchor a pattern source to the full string. Existing `^`/`$` anchors are
/// stripped first so registry data written either way matches identically.
fn anchor(source: &str) -> String {
    let inner = source.strip_prefix('^').unwrap_or(source);
    let inner = inner.strip_suffix('$').unwrap_or(inner);
    format!("^(?:{inner})$")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prefix: &str, pattern: Option<&str>) -> Resource {
        let mut resource = Resource::new(prefix, prefix.to_uppercase());
        resource.pattern = pattern.map(str::to_string);
        resource
    }

    #[test]
    fn anchored_full_match() {
        let doid = record("doid", Some(r"\d+"));
        let index = PatternIndex::build([&doid], false).unwrap();
        assert!(index.validate(&doid, "4325"));
        assert!(!index.validate(&doid, "DOID:4325"));
        assert!(!index.validate(&doid, "4325x"));
        assert!(!index.validate(&doid, ""));
    }

    #[test]
    fn pre_anchored_source_is_not_double_wrapped() {
        let chebi = record("chebi", Some(r"^\d{1,7}$"));
        let index = PatternIndex::build([&chebi], false).unwrap();
        assert!(index.validate(&chebi, "24867"));
        assert!(!index.validate(&chebi, "24867890"));
    }

    #[test]
    fn absent_pattern_always_passes() {
        let free = record("free", None);
        let index = PatternIndex::build([&free], false).unwrap();
        assert!(index.validate(&free, "anything at all"));
    }

    #[test]
    fn bad_pattern_degrades_with_warning() {
        let broken = record("broken", Some(r"[unclosed"));
        let index = PatternIndex::build([&broken], false).unwrap();
        assert_eq!(index.warnings().len(), 1);
        assert_eq!(index.warnings()[0].prefix, "broken");
        assert!(index.validate(&broken, "literally anything"));
    }

    #[test]
    fn bad_pattern_is_fatal_in_strict_mode() {
        let broken = record("broken", Some(r"[unclosed"));
        let err = PatternIndex::build([&broken], true).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Configuration { ref prefix, .. } if prefix == "broken"
        ));
    }
}
