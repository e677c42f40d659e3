//! Core data structures for rtforge.
//!
//! This module contains the foundational types of the generator:
//! - Capability flags (memory class, FPU precision support)
//! - The Target contract and its resolution defaults
//! - Build-profile plumbing (flag store, runtime descriptor)
//! - The explicit target catalog

pub mod capability;
pub mod catalog;
pub mod errors;
pub mod profile;
pub mod target;

pub use capability::Capabilities;
pub use catalog::Catalog;
pub use errors::TargetError;
pub use profile::{ProfileConfig, RuntimeDescriptor};
pub use target::Target;
