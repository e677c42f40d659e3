//! Built-in target descriptors.
//!
//! One module per board family. Each concrete target implements the
//! [`Target`](crate::core::Target) contract and overrides only the
//! provided methods that differ from the base behavior.

pub mod esp32;
pub mod hifive1;
pub mod stm32f407;

pub use esp32::Esp32;
pub use hifive1::Hifive1;
pub use stm32f407::Stm32f407;

use crate::core::Catalog;

/// Catalog pre-populated with the built-in targets.
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    // Built-in names are distinct by construction.
    catalog
        .register(Box::new(Esp32::new()))
        .expect("builtin target names are unique");
    catalog
        .register(Box::new(Stm32f407::new()))
        .expect("builtin target names are unique");
    catalog
        .register(Box::new(Hifive1::new()))
        .expect("builtin target names are unique");
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_registers_all_boards() {
        let catalog = builtin_catalog();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["esp32", "hifive1", "stm32f407"]);
    }
}
