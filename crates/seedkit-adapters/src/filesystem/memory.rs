//! In-memory filesystem adapter for testing.
//!
//! Keeps every write in a log so tests can assert that a pass did *not*
//! touch a file, which a real filesystem can only approximate via mtimes.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use seedkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SeedkitResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    writes: Vec<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (and its parent directories) without logging a write.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.add_ancestors(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        String::from_utf8(self.read_bytes(path)?).ok()
    }

    /// Raw contents, for files that are not UTF-8.
    pub fn read_bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// How many times `path` was written through the port.
    pub fn write_count(&self, path: impl AsRef<Path>) -> usize {
        let path = path.as_ref();
        self.inner
            .read()
            .map(|inner| inner.writes.iter().filter(|p| p.as_path() == path).count())
            .unwrap_or_default()
    }

    /// Every write made through the port, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.writes.clone())
            .unwrap_or_default()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner.read().is_ok_and(|inner| {
            inner.files.contains_key(path) || inner.directories.contains(path)
        })
    }

    fn create_dir_all(&self, path: &Path) -> SeedkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.add_ancestors(path);
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> SeedkitResult<usize> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if !inner.directories.contains(from) {
            return Err(not_found(from));
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        for dir in dirs {
            inner.add_ancestors(&dir);
        }

        let files: Vec<(PathBuf, Vec<u8>)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        let mut copied = 0;
        for (dest, content) in files {
            if inner.files.contains_key(&dest) {
                return Err(ApplicationError::CopyConflict { path: dest }.into());
            }
            inner.files.insert(dest, content);
            copied += 1;
        }
        Ok(copied)
    }

    fn walk_files(&self, root: &Path, excluded_dirs: &[&str]) -> SeedkitResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if !inner.directories.contains(root) {
            return Err(not_found(root));
        }

        Ok(inner
            .files
            .keys()
            .filter(|path| {
                let Ok(rel) = path.strip_prefix(root) else {
                    return false;
                };
                // Every component but the last is a directory on the way down.
                let mut components: Vec<_> = rel.components().collect();
                components.pop();
                !components
                    .iter()
                    .any(|c| excluded_dirs.iter().any(|name| c.as_os_str() == *name))
            })
            .cloned()
            .collect())
    }

    fn file_size(&self, path: &Path) -> SeedkitResult<u64> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner
            .files
            .get(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| not_found(path))
    }

    fn read_to_string(&self, path: &Path) -> SeedkitResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        let bytes = inner.files.get(path).ok_or_else(|| not_found(path))?;
        String::from_utf8(bytes.clone()).map_err(|_| {
            ApplicationError::NotUtf8 {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner
            .files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        inner.writes.push(path.to_path_buf());
        Ok(())
    }
}

fn not_found(path: &Path) -> seedkit_core::error::SeedkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}
