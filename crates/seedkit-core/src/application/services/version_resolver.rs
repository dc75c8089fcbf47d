//! Version Resolver - pins `"config"` placeholders to concrete versions.
//!
//! Runs after the scope rewrite, because placeholders are looked up by the
//! project-scoped package identifier.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ports::Filesystem, services::walker},
    domain::{Manifest, StarterConfig},
    error::SeedkitResult,
};

/// What a resolution pass touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolveStats {
    /// Manifests rewritten (every manifest in the tree).
    pub manifests_written: usize,
    /// Placeholder versions replaced.
    pub versions_resolved: usize,
}

/// Resolves placeholder versions and sorts dependency sections.
pub struct VersionResolver<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> VersionResolver<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Resolve every manifest under `root`, the root manifest included.
    ///
    /// A missing mapping aborts before the offending manifest is written.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn resolve(&self, root: &Path, config: &StarterConfig) -> SeedkitResult<ResolveStats> {
        let mut stats = ResolveStats::default();

        for path in walker::find_manifests(self.filesystem, root)? {
            let raw = self.filesystem.read_to_string(&path)?;
            let mut manifest = Manifest::parse(&path, &raw)?;

            let resolved = manifest.resolve_versions(config)?;
            manifest.sort_sections();
            self.filesystem
                .write_file(&path, &manifest.to_pretty_string()?)?;

            debug!(path = %path.display(), resolved, "manifest resolved");
            stats.manifests_written += 1;
            stats.versions_resolved += resolved;
        }

        info!(
            manifests = stats.manifests_written,
            versions = stats.versions_resolved,
            "Version resolution completed"
        );
        Ok(stats)
    }
}
