//! Directory walking and manifest discovery.
//!
//! Every stage of the pipeline enumerates the project tree through these two
//! functions so the exclusion rules are applied identically everywhere.

use std::path::{Path, PathBuf};

use tracing::{instrument, trace};

use crate::{application::ports::Filesystem, error::SeedkitResult};

/// Directory names that are never descended into, at any depth.
pub const EXCLUDED_DIRS: [&str; 3] = ["node_modules", ".git", ".turbo"];

/// File name of a package manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// All regular files under `root`, skipping [`EXCLUDED_DIRS`].
#[instrument(skip(fs), fields(root = %root.display()))]
pub fn find_all_files(fs: &dyn Filesystem, root: &Path) -> SeedkitResult<Vec<PathBuf>> {
    let files = fs.walk_files(root, &EXCLUDED_DIRS)?;
    trace!(count = files.len(), "walked project tree");
    Ok(files)
}

/// Every `package.json` under `root`. Contents are not inspected.
pub fn find_manifests(fs: &dyn Filesystem, root: &Path) -> SeedkitResult<Vec<PathBuf>> {
    Ok(find_all_files(fs, root)?
        .into_iter()
        .filter(|p| is_manifest(p))
        .collect())
}

/// Whether the last path segment is exactly `package.json`.
pub fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name == MANIFEST_FILE_NAME)
}
