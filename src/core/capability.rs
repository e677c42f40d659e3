//! Hardware capability flags - what a target can and cannot do.
//!
//! Capabilities constrain which runtime variants the generator selects:
//! a small-memory target gets reduced-footprint data structures, and the
//! FPU flags decide which floating-point support units are included.

use serde::{Deserialize, Serialize};

/// Fixed hardware capability record for a target.
///
/// The two FPU flags are independent: a target may have neither, one,
/// or both precisions in hardware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Capabilities {
    /// Address space / RAM constrained enough to require reduced-footprint
    /// runtime data structures
    pub small_memory: bool,

    /// Single-precision floating point in hardware
    pub single_precision_fpu: bool,

    /// Double-precision floating point in hardware
    pub double_precision_fpu: bool,
}

impl Capabilities {
    /// Create a capability record with everything disabled.
    pub fn new() -> Self {
        Capabilities::default()
    }

    /// Mark the target as memory constrained.
    pub fn with_small_memory(mut self) -> Self {
        self.small_memory = true;
        self
    }

    /// Mark single-precision FPU support.
    pub fn with_single_precision_fpu(mut self) -> Self {
        self.single_precision_fpu = true;
        self
    }

    /// Mark double-precision FPU support.
    pub fn with_double_precision_fpu(mut self) -> Self {
        self.double_precision_fpu = true;
        self
    }

    /// Whether the target has any hardware floating point at all.
    pub fn has_fpu(&self) -> bool {
        self.single_precision_fpu || self.double_precision_fpu
    }
}
