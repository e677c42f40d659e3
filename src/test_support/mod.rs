//! Test utilities and mocks for rtforge unit tests.
//!
//! Provides an in-memory file source and a configurable fixture target so
//! resolution can be tested without touching the real filesystem or
//! depending on any built-in board.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::core::capability::Capabilities;
use crate::core::target::Target;
use crate::util::fs::{FileError, FileSource};

/// In-memory [`FileSource`] for testing without real I/O.
#[derive(Debug, Clone, Default)]
pub struct MockFiles {
    files: HashMap<PathBuf, String>,
}

impl MockFiles {
    /// Create a new empty mock file source.
    pub fn new() -> Self {
        MockFiles {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given content.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl FileSource for MockFiles {
    fn read_to_string(&self, path: &Path) -> Result<String, FileError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FileError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

/// Configurable fixture target.
///
/// Defaults: triple `<name>-elf`, no capabilities, no extra sources, no
/// supported profiles, and the base contract's provided behavior for
/// everything else.
pub struct TestTarget {
    name: String,
    triple: String,
    capabilities: Capabilities,
    extra_sources: Vec<PathBuf>,
    system_specs: BTreeMap<String, PathBuf>,
    libc_profiles: Vec<String>,
}

impl TestTarget {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let triple = format!("{}-elf", name);
        TestTarget {
            name,
            triple,
            capabilities: Capabilities::new(),
            extra_sources: Vec::new(),
            system_specs: BTreeMap::new(),
            libc_profiles: Vec::new(),
        }
    }

    pub fn with_triple(mut self, triple: impl Into<String>) -> Self {
        self.triple = triple.into();
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_extra_sources(
        mut self,
        sources: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        self.extra_sources = sources.into_iter().map(|s| s.into()).collect();
        self
    }

    pub fn with_system_spec(mut self, profile: impl Into<String>, spec: impl Into<PathBuf>) -> Self {
        self.system_specs.insert(profile.into(), spec.into());
        self
    }

    pub fn with_libc_for(mut self, profile: impl Into<String>) -> Self {
        self.libc_profiles.push(profile.into());
        self
    }
}

impl Target for TestTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn triple(&self) -> &str {
        &self.triple
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn extra_sources(&self) -> &[PathBuf] {
        &self.extra_sources
    }

    fn system_specs(&self) -> &BTreeMap<String, PathBuf> {
        &self.system_specs
    }

    fn has_libc(&self, profile: &str) -> bool {
        self.libc_profiles.iter().any(|p| p == profile)
    }
}
