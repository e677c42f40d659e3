//! Resolution error types and diagnostics.
//!
//! Every variant is a configuration-integrity error: resolution either
//! produces all outputs for a target/profile pair or aborts with one of
//! these. Nothing here is transient, so nothing is retried.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::fs::FileError;

/// Error resolving a target's declarations.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum TargetError {
    /// The profile is absent from the target's system-spec map.
    ///
    /// A caller error: the generator requested a target/profile
    /// combination the catalog never promised.
    #[error("profile `{profile}` is not supported by target `{target}`")]
    #[diagnostic(
        code(rtforge::target::unsupported_profile),
        help("Check the target's supported profiles in the catalog")
    )]
    NotSupportedProfile { target: String, profile: String },

    /// The backing runtime-description document does not exist.
    ///
    /// A fatal catalog-integrity error: the entry promises a document it
    /// cannot deliver. Never defaulted to an empty document.
    #[error("missing runtime description for target `{target}`: {}", path.display())]
    #[diagnostic(
        code(rtforge::target::missing_descriptor),
        help("The catalog entry is broken; restore the target's runtime document")
    )]
    MissingDescriptorFile {
        target: String,
        path: PathBuf,
        #[source]
        source: FileError,
    },

    /// Two targets registered under the same catalog name.
    #[error("target `{name}` is already registered")]
    #[diagnostic(
        code(rtforge::catalog::duplicate_target),
        help("Target names are catalog keys and must be unique")
    )]
    DuplicateTarget { name: String },

    /// The requested target name is not in the catalog.
    #[error("target not found: `{name}`")]
    #[diagnostic(code(rtforge::catalog::not_found))]
    TargetNotFound { name: String },
}

impl TargetError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TargetError::NotSupportedProfile { target, profile } => {
                Diagnostic::error(format!(
                    "profile `{}` is not supported by target `{}`",
                    profile, target
                ))
                .with_suggestion(suggestions::UNSUPPORTED_PROFILE)
            }

            TargetError::MissingDescriptorFile { target, path, .. } => {
                Diagnostic::error(format!(
                    "missing runtime description for target `{}`",
                    target
                ))
                .with_location(path.clone())
                .with_context("the catalog entry references a document that does not exist")
                .with_suggestion(suggestions::MISSING_DESCRIPTOR)
            }

            TargetError::DuplicateTarget { name } => {
                Diagnostic::error(format!("target `{}` is already registered", name))
                    .with_suggestion(suggestions::DUPLICATE_TARGET)
            }

            TargetError::TargetNotFound { name } => {
                Diagnostic::error(format!("target not found: `{}`", name))
                    .with_suggestion(suggestions::TARGET_NOT_FOUND)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_missing_descriptor_preserves_cause_path() {
        let err = TargetError::MissingDescriptorFile {
            target: "esp32".to_string(),
            path: PathBuf::from("xtensa/esp32/runtime.xml"),
            source: FileError::NotFound {
                path: PathBuf::from("xtensa/esp32/runtime.xml"),
            },
        };

        // The propagated cause names the attempted path for diagnostics.
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("xtensa/esp32/runtime.xml"));

        let diag = err.to_diagnostic();
        assert_eq!(
            diag.location.as_deref(),
            Some(Path::new("xtensa/esp32/runtime.xml"))
        );
    }

    #[test]
    fn test_unsupported_profile_names_both_sides() {
        let err = TargetError::NotSupportedProfile {
            target: "esp32".to_string(),
            profile: "full".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("esp32"));
        assert!(message.contains("full"));
    }
}
