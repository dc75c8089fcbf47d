// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `SeedkitError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid scope '{scope}': {reason}")]
    InvalidScope { scope: String, reason: String },

    #[error("invalid starter configuration: {0}")]
    InvalidStarterConfig(String),

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("malformed manifest {path}: {reason}")]
    MalformedManifest { path: PathBuf, reason: String },

    #[error("missing version mapping for \"{package}\" in config (file: {path})")]
    UnresolvedVersion { package: String, path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use lowercase letters, digits, '.', '_' and '-' only".into(),
                "Start with a letter or a digit".into(),
                "Examples: myapp, my-app, app.web".into(),
            ],
            Self::InvalidScope { scope, .. } => vec![
                format!("'{scope}' cannot be used as a package scope"),
                "Set templateScope to something like \"x3bun\" (without '@')".into(),
            ],
            Self::InvalidStarterConfig(msg) => vec![
                "Check the starter config.json next to the templates".into(),
                format!("Details: {msg}"),
            ],
            Self::MalformedManifest { path, .. } => vec![
                format!("Fix the JSON in {}", path.display()),
                "The generated project was left as-is for inspection".into(),
            ],
            Self::UnresolvedVersion { package, .. } => vec![
                format!("Add \"{package}\" to the \"packages\" map of the starter config"),
                "Or replace the \"config\" placeholder with a concrete version".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::InvalidScope { .. } | Self::InvalidStarterConfig(_) => {
                ErrorCategory::Configuration
            }
            Self::MalformedManifest { .. } => ErrorCategory::Validation,
            Self::UnresolvedVersion { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
