// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Seedkit.
//!
//! This module contains pure business logic with no I/O. Reading and
//! writing files is done by the application layer through the
//! [`Filesystem`](crate::application::ports::Filesystem) port.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few crates**: std + thiserror + serde/serde_json (manifests are JSON)
//! - **Validated values**: names and scopes are checked at construction
//!
// Public API - what the world sees
pub mod collation;
pub mod error;
pub mod manifest;
pub mod starter_config;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use manifest::{DependencySection, Manifest, SENTINEL_VERSION};
pub use starter_config::StarterConfig;
pub use value_objects::{ProjectName, Scope, ScopeRewrite};
