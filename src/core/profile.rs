//! Build profile plumbing - the mutable state targets may amend.
//!
//! Profiles themselves are owned by the build generator and identified by
//! plain strings ("light", "embedded", ...); targets only react to the
//! name. What lives here is the flag store targets append into and the
//! opaque runtime descriptor they pass through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Profile-level build flags, amended by targets before the build proceeds.
///
/// The flag map is private on purpose: several targets (plus the
/// generator's seed flags) share one `ProfileConfig`, so amendments may
/// only append to a category, never replace it. There is no API for
/// wholesale replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profile name this configuration was built for
    pub profile: String,

    build_flags: BTreeMap<String, Vec<String>>,
}

impl ProfileConfig {
    /// Create an empty configuration for a profile.
    pub fn new(profile: impl Into<String>) -> Self {
        ProfileConfig {
            profile: profile.into(),
            build_flags: BTreeMap::new(),
        }
    }

    /// Append flags to a category, preserving everything already there.
    pub fn append_flags(
        &mut self,
        category: &str,
        flags: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.build_flags
            .entry(category.to_string())
            .or_default()
            .extend(flags.into_iter().map(|f| f.into()));
    }

    /// Flags recorded for a category, in append order.
    pub fn flags(&self, category: &str) -> &[String] {
        self.build_flags
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over all flag categories and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.build_flags
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether any flags have been recorded.
    pub fn is_empty(&self) -> bool {
        self.build_flags.is_empty()
    }
}

/// Opaque runtime descriptor handed through to targets.
///
/// Owned by the build generator; targets receive it in
/// [`Target::runtime_description`](crate::core::Target::runtime_description)
/// but are not expected to interpret it beyond passing it along.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeDescriptor {
    /// Profile the runtime is being assembled for
    pub profile: String,

    /// Free-form scenario variables set by the generator
    #[serde(default)]
    pub scenarios: BTreeMap<String, String>,
}

impl RuntimeDescriptor {
    /// Create a descriptor for a profile.
    pub fn new(profile: impl Into<String>) -> Self {
        RuntimeDescriptor {
            profile: profile.into(),
            scenarios: BTreeMap::new(),
        }
    }

    /// Set a scenario variable.
    pub fn with_scenario(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.scenarios.insert(key.into(), value.into());
        self
    }
}
