//! Scope Rewriter - moves a copied tree from the template scope to the
//! project scope.
//!
//! Two passes, in order:
//!
//! 1. **Manifests**: every `package.json` except the root one is parsed and
//!    rewritten structurally (`name`, dependency keys), with a textual
//!    fallback for nested values. Always written back pretty-printed.
//! 2. **Free text**: every text-like file (by extension, at most
//!    [`MAX_TEXT_FILE_BYTES`]) that still mentions the old prefix gets a plain
//!    substring replacement and is written back verbatim.
//!
//! The free-text pass replaces the prefix wherever it appears, comments and
//! prose included.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::walker::{self, MANIFEST_FILE_NAME},
    },
    domain::{Manifest, ScopeRewrite},
    error::{SeedkitError, SeedkitResult},
};

/// Extensions (without the dot) the free-text pass looks at.
pub const TEXT_FILE_EXTENSIONS: [&str; 11] = [
    "json", "js", "cjs", "mjs", "ts", "mts", "cts", "tsx", "yaml", "yml", "md",
];

/// Files larger than this are left alone by the free-text pass.
pub const MAX_TEXT_FILE_BYTES: u64 = 2_000_000;

/// What a rewrite touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    /// Workspace manifests rewritten by the structural pass.
    pub manifests_rescoped: usize,
    /// Files rewritten by the free-text pass.
    pub text_files_rewritten: usize,
    /// Text-like files skipped for being over the size ceiling.
    pub oversized_skipped: usize,
}

/// Rewrites scoped identifiers across a project tree.
pub struct ScopeRewriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ScopeRewriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Run both passes over `root`.
    ///
    /// Aborts on the first error; files rewritten before it stay rewritten.
    #[instrument(
        skip_all,
        fields(
            root = %root.display(),
            from = rewrite.from_prefix(),
            to = rewrite.to_prefix()
        )
    )]
    pub fn rewrite(&self, root: &Path, rewrite: &ScopeRewrite) -> SeedkitResult<RewriteStats> {
        let mut stats = RewriteStats::default();

        if rewrite.is_noop() {
            info!("Template scope equals project scope, nothing to rewrite");
            return Ok(stats);
        }

        stats.manifests_rescoped = self.rewrite_manifests(root, rewrite)?;
        self.rewrite_text_files(root, rewrite, &mut stats)?;

        info!(
            manifests = stats.manifests_rescoped,
            text_files = stats.text_files_rewritten,
            "Scope rewrite completed"
        );
        Ok(stats)
    }

    /// Structural pass over workspace manifests.
    fn rewrite_manifests(&self, root: &Path, rewrite: &ScopeRewrite) -> SeedkitResult<usize> {
        let root_manifest = root.join(MANIFEST_FILE_NAME);
        let mut count = 0;

        for path in walker::find_manifests(self.filesystem, root)? {
            // The root manifest is renamed by the orchestrator.
            if path == root_manifest {
                continue;
            }

            let raw = self.filesystem.read_to_string(&path)?;
            let mut manifest = Manifest::parse(&path, &raw)?;
            manifest.rescope(rewrite)?;
            self.filesystem
                .write_file(&path, &manifest.to_pretty_string()?)?;

            debug!(path = %path.display(), "manifest rescoped");
            count += 1;
        }

        Ok(count)
    }

    /// Blunt substring pass over every text-like file.
    fn rewrite_text_files(
        &self,
        root: &Path,
        rewrite: &ScopeRewrite,
        stats: &mut RewriteStats,
    ) -> SeedkitResult<()> {
        for path in walker::find_all_files(self.filesystem, root)? {
            if !is_text_file(&path) {
                continue;
            }

            if self.filesystem.file_size(&path)? > MAX_TEXT_FILE_BYTES {
                debug!(path = %path.display(), "skipping oversized file");
                stats.oversized_skipped += 1;
                continue;
            }

            let raw = match self.filesystem.read_to_string(&path) {
                Ok(raw) => raw,
                Err(SeedkitError::Application(ApplicationError::NotUtf8 { .. })) => {
                    warn!(path = %path.display(), "skipping file that is not valid UTF-8");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if !rewrite.occurs_in(&raw) {
                continue;
            }

            let replaced = rewrite.replace_all(&raw);
            self.filesystem.write_file(&path, &replaced)?;

            debug!(path = %path.display(), "text file rewritten");
            stats.text_files_rewritten += 1;
        }

        Ok(())
    }
}

/// Whether the file's extension is on the text allow-list.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEXT_FILE_EXTENSIONS.contains(&ext))
}
