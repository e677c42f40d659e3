//! The build generator - combining target declarations into runtime
//! configurations and writing them out.

pub mod emit;
pub mod resolve;

pub use emit::emit;
pub use resolve::{Generator, RuntimeConfig};
