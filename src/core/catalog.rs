//! Target catalog - explicit registry of supported targets.
//!
//! The catalog is built and owned by the build generator at startup;
//! targets register via explicit calls, never import-time side effects.

use std::collections::BTreeMap;

use crate::core::errors::TargetError;
use crate::core::target::Target;

/// Registry of targets keyed by [`Target::name`].
#[derive(Default)]
pub struct Catalog {
    targets: BTreeMap<String, Box<dyn Target>>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Catalog {
            targets: BTreeMap::new(),
        }
    }

    /// Register a target under its own name.
    ///
    /// Names are catalog keys: a second registration under an existing
    /// name fails with [`TargetError::DuplicateTarget`].
    pub fn register(&mut self, target: Box<dyn Target>) -> Result<(), TargetError> {
        let name = target.name().to_string();
        if self.targets.contains_key(&name) {
            return Err(TargetError::DuplicateTarget { name });
        }

        tracing::debug!("registered target `{}` ({})", name, target.triple());
        self.targets.insert(name, target);
        Ok(())
    }

    /// Look up a target by name.
    pub fn get(&self, name: &str) -> Option<&dyn Target> {
        self.targets.get(name).map(|t| t.as_ref())
    }

    /// Names of all registered targets, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Iterate over all registered targets.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Target> {
        self.targets.values().map(|t| t.as_ref())
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
