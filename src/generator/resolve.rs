//! Resolution - combining a target's declarations into a runtime
//! configuration.
//!
//! The generator holds the catalog of concrete targets and, for a requested
//! profile, queries one target for capability flags, extra sources, the
//! system-spec file, and the runtime-description document. The combined
//! result is handed to the (external) compiler invocation step.
//!
//! Resolution is all-or-nothing: every output for the pair resolves, or
//! the pair fails with a typed error and nothing partial is returned.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::capability::Capabilities;
use crate::core::catalog::Catalog;
use crate::core::errors::TargetError;
use crate::core::profile::{ProfileConfig, RuntimeDescriptor};
use crate::core::target::Target;
use crate::util::config::Config;
use crate::util::fs::FileSource;

/// Fully resolved runtime configuration for one target/profile pair.
///
/// Table-valued fields sit last so the TOML summary serializes cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeConfig {
    /// Target name
    pub target: String,

    /// Cross-compiler triple
    pub triple: String,

    /// Profile this configuration was resolved for
    pub profile: String,

    /// Whether a libc layer is available for this profile
    pub has_libc: bool,

    /// Full source list: baseline first, then target extras, in link order
    pub sources: Vec<PathBuf>,

    /// System-specification file for this profile
    pub system_spec: PathBuf,

    /// Runtime-description document text, verbatim
    #[serde(skip)]
    pub runtime_xml: String,

    /// Hardware capability flags
    pub capabilities: Capabilities,

    /// Build flags after seed values and target amendment
    pub build_flags: ProfileConfig,
}

/// The build generator context.
///
/// Owns the target catalog, the file collaborator for runtime documents,
/// the baseline source set shared by all targets, and the seed build flags
/// every profile starts from. Targets are immutable, so a `Generator` can
/// resolve the same pair repeatedly with identical results.
pub struct Generator {
    catalog: Catalog,
    files: Box<dyn FileSource>,
    baseline: Vec<PathBuf>,
    seed_flags: BTreeMap<String, Vec<String>>,
}

impl Generator {
    /// Create a generator over a catalog and a runtime source tree.
    pub fn new(catalog: Catalog, files: Box<dyn FileSource>) -> Self {
        Generator {
            catalog,
            files,
            baseline: Vec::new(),
            seed_flags: BTreeMap::new(),
        }
    }

    /// Set the baseline sources every target receives.
    pub fn with_baseline(mut self, sources: impl IntoIterator<Item = PathBuf>) -> Self {
        self.baseline = sources.into_iter().collect();
        self
    }

    /// Set the seed build flags copied into every resolved profile.
    pub fn with_seed_flags(mut self, flags: BTreeMap<String, Vec<String>>) -> Self {
        self.seed_flags = flags;
        self
    }

    /// Take baseline sources and seed flags from a loaded [`Config`].
    pub fn with_config(self, config: &Config) -> Self {
        self.with_baseline(config.baseline_sources.iter().cloned())
            .with_seed_flags(config.build_flags.clone())
    }

    /// The target catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a named target for a profile.
    pub fn resolve(&self, target_name: &str, profile: &str) -> Result<RuntimeConfig, TargetError> {
        let target = self
            .catalog
            .get(target_name)
            .ok_or_else(|| TargetError::TargetNotFound {
                name: target_name.to_string(),
            })?;
        self.resolve_target(target, profile)
    }

    /// Resolve one target's declarations for a profile.
    pub fn resolve_target(
        &self,
        target: &dyn Target,
        profile: &str,
    ) -> Result<RuntimeConfig, TargetError> {
        tracing::debug!(
            "resolving target `{}` ({}) for profile `{}`",
            target.name(),
            target.triple(),
            profile
        );

        let system_spec = target.system_spec_for(profile)?.to_path_buf();

        let rts = RuntimeDescriptor::new(profile);
        let runtime_xml = target.runtime_description(profile, &rts, self.files.as_ref())?;

        // Baseline first, then target extras in declared order. A target
        // re-declaring a baseline source is a catalog smell, not an error.
        let mut sources = self.baseline.clone();
        for extra in target.extra_sources() {
            if self.baseline.contains(extra) {
                tracing::warn!(
                    "target `{}` re-declares baseline source {}; skipping",
                    target.name(),
                    extra.display()
                );
                continue;
            }
            sources.push(extra.clone());
        }

        let mut build_flags = ProfileConfig::new(profile);
        for (category, flags) in &self.seed_flags {
            build_flags.append_flags(category, flags.iter().cloned());
        }
        target.amend_profile(&mut build_flags);

        Ok(RuntimeConfig {
            target: target.name().to_string(),
            triple: target.triple().to_string(),
            profile: profile.to_string(),
            has_libc: target.has_libc(profile),
            sources,
            system_spec,
            runtime_xml,
            capabilities: target.capabilities(),
            build_flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockFiles, TestTarget};

    fn generator_with(targets: Vec<TestTarget>, files: MockFiles) -> Generator {
        let mut catalog = Catalog::new();
        for target in targets {
            catalog.register(Box::new(target)).unwrap();
        }
        Generator::new(catalog, Box::new(files))
    }

    fn ready_files(names: &[&str]) -> MockFiles {
        let mut files = MockFiles::new();
        for name in names {
            files.add_file(format!("{}/runtime.xml", name), format!("<target name=\"{}\"/>", name));
        }
        files
    }

    #[test]
    fn test_resolve_combines_all_declarations() {
        let target = TestTarget::new("board-a")
            .with_triple("arm-eabi")
            .with_system_spec("light", "system-a.ads")
            .with_extra_sources(["src/s-macres__a.adb"])
            .with_libc_for("light");

        let generator = generator_with(vec![target], ready_files(&["board-a"]))
            .with_baseline([PathBuf::from("src/s-parame.ads")]);

        let config = generator.resolve("board-a", "light").unwrap();
        assert_eq!(config.target, "board-a");
        assert_eq!(config.triple, "arm-eabi");
        assert!(config.has_libc);
        assert_eq!(config.system_spec, PathBuf::from("system-a.ads"));
        assert_eq!(config.runtime_xml, "<target name=\"board-a\"/>");
        assert_eq!(
            config.sources,
            vec![
                PathBuf::from("src/s-parame.ads"),
                PathBuf::from("src/s-macres__a.adb"),
            ]
        );
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let target = TestTarget::new("board-a").with_system_spec("light", "system-a.ads");
        let generator = generator_with(vec![target], ready_files(&["board-a"]));

        let first = generator.resolve("board-a", "light").unwrap();
        let second = generator.resolve("board-a", "light").unwrap();
        assert_eq!(first.system_spec, second.system_spec);
        assert_eq!(first.sources, second.sources);
        assert_eq!(first.runtime_xml, second.runtime_xml);
    }

    #[test]
    fn test_unsupported_profile_aborts_resolution() {
        let target = TestTarget::new("board-a").with_system_spec("light", "system-a.ads");
        let generator = generator_with(vec![target], ready_files(&["board-a"]));

        let err = generator.resolve("board-a", "full").unwrap_err();
        assert!(matches!(err, TargetError::NotSupportedProfile { .. }));
    }

    #[test]
    fn test_unknown_target_is_reported() {
        let generator = generator_with(vec![], MockFiles::new());
        let err = generator.resolve("board-x", "light").unwrap_err();
        assert!(matches!(err, TargetError::TargetNotFound { .. }));
    }

    #[test]
    fn test_missing_descriptor_aborts_resolution() {
        // System spec resolves, but the runtime document is absent.
        let target = TestTarget::new("board-a").with_system_spec("light", "system-a.ads");
        let generator = generator_with(vec![target], MockFiles::new());

        let err = generator.resolve("board-a", "light").unwrap_err();
        assert!(matches!(err, TargetError::MissingDescriptorFile { .. }));
    }

    #[test]
    fn test_baseline_duplicates_are_skipped() {
        let target = TestTarget::new("board-a")
            .with_system_spec("light", "system-a.ads")
            .with_extra_sources(["src/s-parame.ads", "src/s-macres__a.adb"]);

        let generator = generator_with(vec![target], ready_files(&["board-a"]))
            .with_baseline([PathBuf::from("src/s-parame.ads")]);

        let config = generator.resolve("board-a", "light").unwrap();
        assert_eq!(
            config.sources,
            vec![
                PathBuf::from("src/s-parame.ads"),
                PathBuf::from("src/s-macres__a.adb"),
            ]
        );
    }

    #[test]
    fn test_seed_flags_survive_amendment() {
        struct Amending(TestTarget);

        // Forward the data queries, amend flags on top.
        impl crate::core::Target for Amending {
            fn name(&self) -> &str {
                self.0.name()
            }
            fn triple(&self) -> &str {
                self.0.triple()
            }
            fn capabilities(&self) -> crate::core::Capabilities {
                self.0.capabilities()
            }
            fn extra_sources(&self) -> &[PathBuf] {
                self.0.extra_sources()
            }
            fn system_specs(&self) -> &std::collections::BTreeMap<String, PathBuf> {
                self.0.system_specs()
            }
            fn amend_profile(&self, config: &mut ProfileConfig) {
                config.append_flags("common_flags", ["-mthumb"]);
            }
        }

        let inner = TestTarget::new("board-a").with_system_spec("light", "system-a.ads");
        let mut catalog = Catalog::new();
        catalog.register(Box::new(Amending(inner))).unwrap();

        let mut seed = BTreeMap::new();
        seed.insert(
            "common_flags".to_string(),
            vec!["-ffunction-sections".to_string()],
        );

        let generator = Generator::new(catalog, Box::new(ready_files(&["board-a"])))
            .with_seed_flags(seed);

        let config = generator.resolve("board-a", "light").unwrap();
        assert_eq!(
            config.build_flags.flags("common_flags"),
            &["-ffunction-sections", "-mthumb"]
        );
    }
}
