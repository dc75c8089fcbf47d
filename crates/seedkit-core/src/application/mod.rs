//! Application layer for Seedkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ScopeRewriter, VersionResolver)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and owns all I/O
//! sequencing. Transformations of a single manifest live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ResolveStats, RewriteStats, ScaffoldPlan, ScaffoldReport, ScaffoldService, ScopeRewriter,
    Stage, VersionResolver,
};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
