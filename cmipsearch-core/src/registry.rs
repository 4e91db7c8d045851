//! Immutable name registries.
//!
//! A [`Registry`] wraps one of the constant CMIP6 tables and provides
//! order-preserving, allocation-free access to it. The two global instances are
//! [`MODEL_REGISTRY`](crate::model::MODEL_REGISTRY) and
//! [`EXPERIMENT_REGISTRY`](crate::experiment::EXPERIMENT_REGISTRY).
//!
//! # Example
//!
//! ```rust
//! use cmipsearch_core::model::MODEL_REGISTRY;
//!
//! assert!(MODEL_REGISTRY.contains("CESM2"));
//! assert_eq!(MODEL_REGISTRY.get(0), Some("AOP-v1-5"));
//! ```

use std::collections::HashSet;
use std::fmt;

use log::warn;

use crate::errors::{CmipError, CmipResult};

/// What a registry holds.
///
/// Determines the error variant produced when a lookup misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// CMIP6 model names (`source_id` in the archive)
    Model,
    /// CMIP6 experiment identifiers (`experiment_id` in the archive)
    Experiment,
}

impl RegistryKind {
    /// Human-readable label used in error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            RegistryKind::Model => "model",
            RegistryKind::Experiment => "experiment",
        }
    }

    fn unknown(&self, name: &str) -> CmipError {
        match self {
            RegistryKind::Model => CmipError::UnknownModel(name.to_string()),
            RegistryKind::Experiment => CmipError::UnknownExperiment(name.to_string()),
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered, read-only sequence of registered names.
///
/// Matching is exact and case-sensitive, as names are published by the archive.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    kind: RegistryKind,
    names: &'static [&'static str],
}

impl Registry {
    /// Create a registry over a static table.
    pub const fn new(kind: RegistryKind, names: &'static [&'static str]) -> Self {
        Self { kind, names }
    }

    pub const fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// All names, in registry order.
    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub const fn len(&self) -> usize {
        self.names.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.names.iter().copied()
    }

    /// Name at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Index of `name` within the registry.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    /// Resolve `name` to its registered `'static` spelling.
    ///
    /// # Errors
    ///
    /// Returns [`CmipError::UnknownModel`] or [`CmipError::UnknownExperiment`],
    /// depending on the registry kind, when `name` is not registered.
    pub fn lookup(&self, name: &str) -> CmipResult<&'static str> {
        match self.position(name) {
            Some(index) => Ok(self.names[index]),
            None => {
                warn!("'{}' is not a registered CMIP6 {}", name, self.kind);
                Err(self.kind.unknown(name))
            }
        }
    }

    /// Check that the registry is non-empty and free of duplicates.
    pub fn verify(&self) -> CmipResult<()> {
        check_entries(self.kind.label(), self.iter())
    }
}

impl IntoIterator for Registry {
    type Item = &'static str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, &'static str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().copied()
    }
}

/// Fails on the first repeated name, or if there are no names at all.
pub(crate) fn check_entries<'a>(
    label: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> CmipResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CmipError::DuplicateEntry {
                registry: label.to_string(),
                name: name.to_string(),
            });
        }
    }
    if seen.is_empty() {
        return Err(CmipError::EmptyRegistry(label.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    static FRUIT: Registry = Registry::new(RegistryKind::Model, &["apple", "pear", "plum"]);

    #[test]
    fn test_access_preserves_order() {
        assert_eq!(FRUIT.len(), 3);
        assert!(!FRUIT.is_empty());
        assert_eq!(FRUIT.get(0), Some("apple"));
        assert_eq!(FRUIT.get(2), Some("plum"));
        assert_eq!(FRUIT.get(3), None);
        assert_eq!(FRUIT.iter().collect::<Vec<_>>(), ["apple", "pear", "plum"]);
        assert_eq!(FRUIT.into_iter().count(), 3);
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(FRUIT.contains("pear"));
        assert_eq!(FRUIT.position("pear"), Some(1));
        assert!(!FRUIT.contains("Pear"));
        assert!(!FRUIT.contains("pea"));
        assert_eq!(FRUIT.position(""), None);
    }

    #[test]
    fn test_lookup_error_follows_kind() {
        assert_eq!(FRUIT.lookup("plum").unwrap(), "plum");
        assert!(matches!(
            FRUIT.lookup("kiwi"),
            Err(CmipError::UnknownModel(name)) if name == "kiwi"
        ));

        let experiments = Registry::new(RegistryKind::Experiment, &["historical"]);
        assert!(matches!(
            experiments.lookup("ssp999"),
            Err(CmipError::UnknownExperiment(name)) if name == "ssp999"
        ));
    }

    #[test]
    fn test_verify() {
        assert!(FRUIT.verify().is_ok());

        let empty = Registry::new(RegistryKind::Experiment, &[]);
        assert!(matches!(
            empty.verify(),
            Err(CmipError::EmptyRegistry(label)) if label == "experiment"
        ));

        let repeated = Registry::new(RegistryKind::Model, &["a", "b", "a"]);
        match repeated.verify() {
            Err(CmipError::DuplicateEntry { registry, name }) => {
                assert_eq!(registry, "model");
                assert_eq!(name, "a");
            }
            other => panic!("expected duplicate entry error, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", RegistryKind::Model), "model");
        assert_eq!(format!("{}", RegistryKind::Experiment), "experiment");
    }
}
