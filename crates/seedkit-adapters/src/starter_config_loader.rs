//! Loads the starter `config.json` from disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use seedkit_core::{
    domain::{DomainError, StarterConfig},
    error::{SeedkitError, SeedkitResult},
};

/// Reads and validates a [`StarterConfig`] file.
///
/// # Example
///
/// ```no_run
/// use seedkit_adapters::StarterConfigLoader;
///
/// let config = StarterConfigLoader::new("config.json").load()?;
/// println!("template scope: {}", config.template_scope());
/// # Ok::<(), seedkit_core::error::SeedkitError>(())
/// ```
pub struct StarterConfigLoader {
    path: PathBuf,
}

impl StarterConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file.
    ///
    /// # Errors
    ///
    /// - [`SeedkitError::Configuration`] if the file is missing or unreadable.
    /// - [`DomainError::InvalidStarterConfig`] if it is not valid JSON or the
    ///   template scope fails validation.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> SeedkitResult<StarterConfig> {
        let raw = fs::read_to_string(&self.path).map_err(|e| SeedkitError::Configuration {
            message: format!(
                "failed to read starter config '{}': {e}",
                self.path.display()
            ),
        })?;

        let config = StarterConfig::from_json(&raw).map_err(|e| match e {
            DomainError::InvalidStarterConfig(reason) => DomainError::InvalidStarterConfig(
                format!("{} ({reason})", self.path.display()),
            ),
            other => other,
        })?;

        debug!(
            scope = %config.template_scope(),
            packages = config.packages().len(),
            "starter config loaded"
        );
        Ok(config)
    }
}
