//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use seedkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SeedkitError, SeedkitResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> SeedkitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> SeedkitResult<usize> {
        let mut copied = 0;

        for entry in WalkDir::new(from).min_depth(1) {
            let entry = entry.map_err(|e| map_walk_error(from, e))?;
            let rel = entry.path().strip_prefix(from).map_err(|_| SeedkitError::Internal {
                message: format!(
                    "failed to relativise '{}' against '{}'",
                    entry.path().display(),
                    from.display()
                ),
            })?;
            let dest = to.join(rel);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                // Directories merge; only files conflict.
                if !dest.is_dir() {
                    std::fs::create_dir(&dest)
                        .map_err(|e| map_io_error(&dest, e, "create directory"))?;
                }
                continue;
            }

            if std::fs::symlink_metadata(&dest).is_ok() {
                return Err(ApplicationError::CopyConflict { path: dest }.into());
            }

            if file_type.is_symlink() {
                copy_symlink(entry.path(), &dest)?;
            } else {
                std::fs::copy(entry.path(), &dest)
                    .map_err(|e| map_io_error(&dest, e, "copy file"))?;
            }
            trace!(path = %dest.display(), "copied");
            copied += 1;
        }

        Ok(copied)
    }

    fn walk_files(&self, root: &Path, excluded_dirs: &[&str]) -> SeedkitResult<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && excluded_dirs.iter().any(|name| e.file_name() == *name))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| map_walk_error(root, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn file_size(&self, path: &Path) -> SeedkitResult<u64> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| map_io_error(path, e, "read metadata"))
    }

    fn read_to_string(&self, path: &Path) -> SeedkitResult<String> {
        let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))?;
        String::from_utf8(bytes).map_err(|_| {
            ApplicationError::NotUtf8 {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedkitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> SeedkitResult<()> {
    let target = std::fs::read_link(src).map_err(|e| map_io_error(src, e, "read link"))?;
    std::os::unix::fs::symlink(target, dest).map_err(|e| map_io_error(dest, e, "create link"))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> SeedkitResult<()> {
    // No portable symlink creation; copy what the link points at.
    std::fs::copy(src, dest)
        .map(|_| ())
        .map_err(|e| map_io_error(dest, e, "copy file"))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SeedkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> SeedkitError {
    ApplicationError::FilesystemError {
        path: e.path().unwrap_or(root).to_path_buf(),
        reason: format!("Failed to walk directory: {e}"),
    }
    .into()
}
