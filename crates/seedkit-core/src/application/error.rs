//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// File is not valid UTF-8 and cannot be rewritten as text.
    #[error("File is not valid UTF-8: {path}")]
    NotUtf8 { path: PathBuf },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Template copy hit a path that already exists in the destination.
    #[error("Refusing to overwrite existing path during copy: {path}")]
    CopyConflict { path: PathBuf },

    /// Template directory is missing.
    #[error("Template directory not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
            Self::NotUtf8 { path } => vec![
                format!("Convert {} to UTF-8", path.display()),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::CopyConflict { path } => vec![
                format!("Conflicting path: {}", path.display()),
                "The destination was left partially populated; remove it and retry".into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("Expected a template at {}", path.display()),
                "Pass --template-dir or set paths.template_dir in the config".into(),
            ],
            Self::LockPoisoned => vec!["Retry the operation".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::NotUtf8 { .. } | Self::CopyConflict { .. } => {
                ErrorCategory::Internal
            }
            Self::LockPoisoned => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
