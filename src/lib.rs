//! rtforge - a build generator core for minimal embedded language runtimes
//!
//! This crate provides the target descriptor abstraction a cross-compilation
//! toolchain build generator runs on: each supported hardware target
//! declares its cross triple, hardware capabilities, extra runtime sources,
//! and per-profile system-specification and runtime-description files, and
//! the generator resolves those declarations into a runtime configuration
//! for the downstream compiler invocation.

pub mod core;
pub mod generator;
pub mod targets;
pub mod util;

/// Test utilities and mocks for rtforge unit tests.
///
/// Only available when compiling tests. Provides an in-memory file source
/// and a configurable fixture target.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    capability::Capabilities, catalog::Catalog, errors::TargetError, profile::ProfileConfig,
    profile::RuntimeDescriptor, target::Target,
};

pub use crate::generator::{emit, Generator, RuntimeConfig};
pub use crate::util::config::Config;
pub use crate::util::fs::{DiskFiles, FileError, FileSource};
