//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `seedkit-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::SeedkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `seedkit_adapters::filesystem::LocalFilesystem` (production)
/// - `seedkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are passed through unchanged; callers decide what is absolute
/// - Failures are reported as `ApplicationError::FilesystemError` with the
///   offending path and the underlying message
/// - Synchronous; the pipeline never has two operations in flight
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SeedkitResult<()>;

    /// Recursively copy the contents of `from` into the existing directory
    /// `to`. Fails with `ApplicationError::CopyConflict` on the first
    /// destination path that already exists; nothing is overwritten and what
    /// was copied so far stays in place. Returns the number of files copied.
    fn copy_tree(&self, from: &Path, to: &Path) -> SeedkitResult<usize>;

    /// Every regular file under `root`, never descending into a directory
    /// whose name is in `excluded_dirs`. Order is unspecified.
    fn walk_files(&self, root: &Path, excluded_dirs: &[&str]) -> SeedkitResult<Vec<PathBuf>>;

    /// Size of a file in bytes.
    fn file_size(&self, path: &Path) -> SeedkitResult<u64>;

    /// Read a file as UTF-8. Invalid UTF-8 yields `ApplicationError::NotUtf8`.
    fn read_to_string(&self, path: &Path) -> SeedkitResult<String>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> SeedkitResult<()>;
}
