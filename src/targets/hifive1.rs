//! SiFive HiFive1 (RV32IMAC) target descriptor.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::capability::Capabilities;
use crate::core::target::Target;

/// SiFive HiFive1: FE310 core, no FPU, 16 KiB of RAM.
///
/// Relies entirely on the base contract defaults: no libc for any
/// profile, runtime document at `hifive1/runtime.xml`, no flag amendment.
pub struct Hifive1 {
    capabilities: Capabilities,
    extra_sources: Vec<PathBuf>,
    system_specs: BTreeMap<String, PathBuf>,
}

impl Hifive1 {
    pub fn new() -> Self {
        let extra_sources = vec![
            PathBuf::from("src/s-macres__hifive1.adb"),
            PathBuf::from("src/s-textio__hifive1.adb"),
        ];

        let mut system_specs = BTreeMap::new();
        system_specs.insert("light".to_string(), PathBuf::from("system-xi-riscv32.ads"));

        Hifive1 {
            capabilities: Capabilities::new().with_small_memory(),
            extra_sources,
            system_specs,
        }
    }
}

impl Default for Hifive1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for Hifive1 {
    fn name(&self) -> &str {
        "hifive1"
    }

    fn triple(&self) -> &str {
        "riscv32-elf"
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
}
