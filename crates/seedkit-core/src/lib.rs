//! Seedkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Seedkit
//! monorepo starter generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           seedkit-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, ScopeRewriter,        │
//! │  VersionResolver, walker)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    seedkit-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectName, Scope, Manifest,          │
//! │  StarterConfig)                         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use seedkit_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> SeedkitResult<()> {
//! let config = StarterConfig::from_json(r#"{"templateScope":"x3bun","packages":{}}"#)?;
//! let plan = ScaffoldPlan::new(ProjectName::parse("myapp")?, "templates/default", "myapp");
//!
//! let report = ScaffoldService::new(filesystem).scaffold(&plan, &config)?;
//! println!("created {}", report.workspace_scope);
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldPlan, ScaffoldReport, ScaffoldService, ScopeRewriter, Stage, VersionResolver,
        ports::Filesystem,
    };
    pub use crate::domain::{Manifest, ProjectName, Scope, ScopeRewrite, StarterConfig};
    pub use crate::error::{SeedkitError, SeedkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
