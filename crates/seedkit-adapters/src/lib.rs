//! Infrastructure adapters for Seedkit.
//!
//! This crate implements the ports defined in `seedkit-core::application::ports`
//! and loads the starter configuration from disk. It owns all real I/O.

pub mod filesystem;
pub mod starter_config_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use starter_config_loader::StarterConfigLoader;
