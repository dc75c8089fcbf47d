//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Check the destination is free and the template exists
//! 2. Create the destination and copy the template into it
//! 3. Rename the root package
//! 4. Rewrite the template scope to the project scope
//! 5. Resolve placeholder versions
//!
//! Each stage finishes over the whole tree before the next starts. There is
//! no rollback: a failure leaves the destination as it was at that point.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{
            scope_rewriter::{RewriteStats, ScopeRewriter},
            version_resolver::{ResolveStats, VersionResolver},
            walker::MANIFEST_FILE_NAME,
        },
    },
    domain::{Manifest, ProjectName, ScopeRewrite, StarterConfig},
    error::SeedkitResult,
};

/// Where to generate what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub project_name: ProjectName,
    /// Directory to copy from. Never modified.
    pub template_root: PathBuf,
    /// Directory to create. Must not exist yet.
    pub destination: PathBuf,
}

impl ScaffoldPlan {
    pub fn new(
        project_name: ProjectName,
        template_root: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_name,
            template_root: template_root.into(),
            destination: destination.into(),
        }
    }
}

/// Pipeline stage, reported to progress observers as it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CopyTemplate,
    RenameRoot,
    RewriteScope,
    ResolveVersions,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CopyTemplate => "Copying template",
            Self::RenameRoot => "Renaming root package",
            Self::RewriteScope => "Rewriting workspace scope",
            Self::ResolveVersions => "Resolving dependency versions",
        })
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub root_package_name: String,
    /// e.g. `@myapp/*`
    pub workspace_scope: String,
    pub destination: PathBuf,
    pub files_copied: usize,
    #[serde(flatten)]
    pub rewrite: RewriteStats,
    #[serde(flatten)]
    pub resolve: ResolveStats,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use seedkit_core::application::{ScaffoldPlan, ScaffoldService};
    /// use seedkit_core::domain::{ProjectName, StarterConfig};
    /// # fn run(filesystem: Box<dyn seedkit_core::application::ports::Filesystem>)
    /// #     -> seedkit_core::error::SeedkitResult<()> {
    /// let config = StarterConfig::from_json(r#"{"templateScope":"x3bun"}"#)?;
    /// let plan = ScaffoldPlan::new(ProjectName::parse("myapp")?, "templates/default", "myapp");
    /// ScaffoldService::new(filesystem).scaffold(&plan, &config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate a project.
    pub fn scaffold(
        &self,
        plan: &ScaffoldPlan,
        config: &StarterConfig,
    ) -> SeedkitResult<ScaffoldReport> {
        self.scaffold_with_progress(plan, config, |_| {})
    }

    /// Generate a project, calling `on_stage` as each stage begins.
    #[instrument(
        skip_all,
        fields(
            project = %plan.project_name,
            template = %plan.template_root.display(),
            destination = %plan.destination.display()
        )
    )]
    pub fn scaffold_with_progress(
        &self,
        plan: &ScaffoldPlan,
        config: &StarterConfig,
        mut on_stage: impl FnMut(Stage),
    ) -> SeedkitResult<ScaffoldReport> {
        let fs = self.filesystem.as_ref();
        let destination = plan.destination.as_path();

        // 1. Nothing is touched until both checks pass.
        if fs.exists(destination) {
            return Err(ApplicationError::ProjectExists {
                path: destination.to_path_buf(),
            }
            .into());
        }
        if !fs.exists(&plan.template_root) {
            return Err(ApplicationError::TemplateNotFound {
                path: plan.template_root.clone(),
            }
            .into());
        }

        // 2. Create + copy
        on_stage(Stage::CopyTemplate);
        fs.create_dir_all(destination)?;
        let files_copied = fs.copy_tree(&plan.template_root, destination)?;
        info!(files = files_copied, "Template copied");

        // 3. Root package name
        on_stage(Stage::RenameRoot);
        self.rename_root(destination, plan.project_name.as_str())?;

        // 4. Scope
        on_stage(Stage::RewriteScope);
        let target_scope = plan.project_name.scope();
        let rewrite = ScopeRewrite::new(config.template_scope(), &target_scope);
        let rewrite_stats = ScopeRewriter::new(fs).rewrite(destination, &rewrite)?;

        // 5. Versions
        on_stage(Stage::ResolveVersions);
        let resolve_stats = VersionResolver::new(fs).resolve(destination, config)?;

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            project_name: plan.project_name.to_string(),
            root_package_name: plan.project_name.to_string(),
            workspace_scope: target_scope.wildcard(),
            destination: destination.to_path_buf(),
            files_copied,
            rewrite: rewrite_stats,
            resolve: resolve_stats,
        })
    }

    /// Set the root manifest's `name` to the project name.
    fn rename_root(&self, root: &Path, name: &str) -> SeedkitResult<()> {
        let path = root.join(MANIFEST_FILE_NAME);
        let raw = self.filesystem.read_to_string(&path)?;
        let mut manifest = Manifest::parse(&path, &raw)?;
        manifest.set_name(name);
        self.filesystem
            .write_file(&path, &manifest.to_pretty_string()?)?;
        info!(name, "Root package renamed");
        Ok(())
    }
}
