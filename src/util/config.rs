//! Configuration file support for the generator.
//!
//! A generator run is described by a single `rtforge.toml`:
//! where the shared runtime sources live, where emitted runtimes go,
//! which sources every target receives, and the seed build flags that
//! targets may amend.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const CONFIG_NAME: &str = "rtforge.toml";

/// Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the runtime source tree (system specs, runtime documents)
    pub source_dir: PathBuf,

    /// Directory emitted runtime configurations are written to
    pub output_dir: PathBuf,

    /// Runtime sources shared by every target
    pub baseline_sources: Vec<PathBuf>,

    /// Profile requested when the caller does not name one
    pub default_profile: String,

    /// Seed build flags per category, amended by targets
    pub build_flags: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("install"),
            baseline_sources: Vec::new(),
            default_profile: "light".to_string(),
            build_flags: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config: {}", path.display()))?;

        Ok(())
    }
}
