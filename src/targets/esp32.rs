//! ESP32 (Xtensa LX6) target descriptor.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::capability::Capabilities;
use crate::core::target::Target;

/// Espressif ESP32: Xtensa core, single-precision FPU, small memory.
///
/// The chip ships with a vendor libc, so every profile reports a libc
/// layer as available.
pub struct Esp32 {
    capabilities: Capabilities,
    extra_sources: Vec<PathBuf>,
    system_specs: BTreeMap<String, PathBuf>,
}

impl Esp32 {
    pub fn new() -> Self {
        let extra_sources = vec![
            PathBuf::from("src/s-macres__native.adb"),
            PathBuf::from("src/s-textio__stdio.adb"),
        ];

        let mut system_specs = BTreeMap::new();
        system_specs.insert("light".to_string(), PathBuf::from("system-xi-xtensa.ads"));

        Esp32 {
            capabilities: Capabilities::new()
                .with_small_memory()
                .with_single_precision_fpu(),
            extra_sources,
            system_specs,
        }
    }
}

impl Default for Esp32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for Esp32 {
    fn name(&self) -> &str {
        "esp32"
    }

    fn triple(&self) -> &str {
        "xtensa-esp32-elf"
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

    fn has_libc(&self, _profile: &str) -> bool {
        true
    }

    fn runtime_xml_path(&self, _profile: &str) -> PathBuf {
        Path::new("xtensa/esp32").join("runtime.xml")
    }
}
