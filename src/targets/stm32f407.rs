//! STM32F407 (Cortex-M4F) target descriptor.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::capability::Capabilities;
use crate::core::profile::ProfileConfig;
use crate::core::target::Target;

/// ST STM32F407: Cortex-M4 with a single-precision FPU.
///
/// Supports both the light and embedded profiles; only the embedded
/// runtime carries a libc layer.
pub struct Stm32f407 {
    capabilities: Capabilities,
    extra_sources: Vec<PathBuf>,
    system_specs: BTreeMap<String, PathBuf>,
}

impl Stm32f407 {
    pub fn new() -> Self {
        let extra_sources = vec![
            PathBuf::from("src/s-stm32__f4.adb"),
            PathBuf::from("src/s-bbbosu__stm32f4.adb"),
            PathBuf::from("src/s-textio__stm32f4.adb"),
        ];

        let mut system_specs = BTreeMap::new();
        system_specs.insert(
            "light".to_string(),
            PathBuf::from("system-xi-cortexm4.ads"),
        );
        system_specs.insert(
            "embedded".to_string(),
            PathBuf::from("system-xi-cortexm4-full.ads"),
        );

        Stm32f407 {
            capabilities: Capabilities::new().with_single_precision_fpu(),
            extra_sources,
            system_specs,
        }
    }
}

impl Default for Stm32f407 {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for Stm32f407 {
    fn name(&self) -> &str {
        "stm32f407"
    }

    fn triple(&self) -> &str {
        "arm-eabi"
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
        profile == "embedded"
    }

    fn runtime_xml_path(&self, _profile: &str) -> PathBuf {
        Path::new("arm/stm32f4").join("runtime.xml")
    }

    fn amend_profile(&self, config: &mut ProfileConfig) {
        config.append_flags(
            "common_flags",
            [
                "-mlittle-endian",
                "-mthumb",
                "-mcpu=cortex-m4",
                "-mfloat-abi=hard",
                "-mfpu=fpv4-sp-d16",
            ],
        );
    }
}
