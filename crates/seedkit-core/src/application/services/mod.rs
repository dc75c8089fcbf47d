//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "rewrite a scope".

pub mod scaffold_service;
pub mod scope_rewriter;
pub mod version_resolver;
pub mod walker;

pub use scaffold_service::{ScaffoldPlan, ScaffoldReport, ScaffoldService, Stage};
pub use scope_rewriter::{RewriteStats, ScopeRewriter};
pub use version_resolver::{ResolveStats, VersionResolver};
