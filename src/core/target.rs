//! Target definitions - the contract every supported board satisfies.
//!
//! A Target describes one hardware/toolchain combination: its
//! cross-compilation triple, hardware capabilities, the runtime sources it
//! contributes beyond the shared baseline, and how build profiles map to
//! system-specification and runtime-description files.
//!
//! Concrete targets implement the required queries and override only the
//! provided methods that differ from the base contract (libc availability,
//! the runtime document location, and the flag-amendment hook).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::capability::Capabilities;
use crate::core::errors::TargetError;
use crate::core::profile::{ProfileConfig, RuntimeDescriptor};
use crate::util::fs::FileSource;

/// Descriptor for one supported hardware/toolchain combination.
///
/// Implementations must be immutable after construction: every method is a
/// pure read, so one instance can be queried from multiple generator
/// threads without locking. The only mutation in the whole contract is the
/// caller-owned [`ProfileConfig`] passed to [`Target::amend_profile`].
pub trait Target: Send + Sync {
    /// Short target identifier, non-empty, unique within the catalog.
    fn name(&self) -> &str;

    /// Cross-compiler triple. Passed through to the toolchain unvalidated.
    fn triple(&self) -> &str;

    /// Fixed hardware capability flags.
    fn capabilities(&self) -> Capabilities;

    /// Runtime sources this target contributes beyond the shared baseline,
    /// in link order. Additive to the baseline set, never a replacement.
    fn extra_sources(&self) -> &[PathBuf];

    /// Profile name to system-specification file. A profile absent from
    /// this map is unsupported for this target.
    fn system_specs(&self) -> &BTreeMap<String, PathBuf>;

    /// Whether this target provides a libc-equivalent runtime layer for
    /// `profile`. Unrecognized profiles are assumed not to.
    fn has_libc(&self, _profile: &str) -> bool {
        false
    }

    /// Location of the runtime-description document for `profile`,
    /// relative to the runtime source tree.
    fn runtime_xml_path(&self, _profile: &str) -> PathBuf {
        Path::new(self.name()).join("runtime.xml")
    }

    /// Resolve a profile to its system-specification file.
    ///
    /// Fails with [`TargetError::NotSupportedProfile`] when the profile is
    /// absent from the map. Same profile always resolves to the same path.
    fn system_spec_for(&self, profile: &str) -> Result<&Path, TargetError> {
        self.system_specs()
            .get(profile)
            .map(PathBuf::as_path)
            .ok_or_else(|| TargetError::NotSupportedProfile {
                target: self.name().to_string(),
                profile: profile.to_string(),
            })
    }

    /// Return the textual runtime-description document for `profile`.
    ///
    /// The default reads the document at [`Target::runtime_xml_path`]
    /// verbatim through the file collaborator; no substitution happens
    /// here. The runtime descriptor is opaque to the target. A missing
    /// backing file fails with [`TargetError::MissingDescriptorFile`]
    /// carrying the attempted path; it is never defaulted to an empty
    /// document.
    fn runtime_description(
        &self,
        profile: &str,
        _rts: &RuntimeDescriptor,
        files: &dyn FileSource,
    ) -> Result<String, TargetError> {
        let path = self.runtime_xml_path(profile);
        files
            .read_to_string(&path)
            .map_err(|source| TargetError::MissingDescriptorFile {
                target: self.name().to_string(),
                path,
                source,
            })
    }

    /// Hook for appending target-specific build flags before the build
    /// proceeds. The base contract performs no mutation.
    ///
    /// The config is shared with the generator's seed flags and with other
    /// targets, so overrides must go through
    /// [`ProfileConfig::append_flags`] and never discard existing values.
    fn amend_profile(&self, _config: &mut ProfileConfig) {}
}
