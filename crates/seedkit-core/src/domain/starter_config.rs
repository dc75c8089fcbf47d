//! Starter configuration: the template scope and the version table.
//!
//! Deserialised from the `config.json` shipped next to the templates:
//!
//! ```json
//! {
//!   "templateScope": "x3bun",
//!   "packages": { "@myapp/ui": "2.3.1", "react": "^19.0.0" }
//! }
//! ```
//!
//! Validation happens during deserialisation, so holding a `StarterConfig`
//! means the scope grammar has already been checked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Scope, error::DomainError};

/// Validated starter configuration. Read-only for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStarterConfig", rename_all = "camelCase")]
pub struct StarterConfig {
    template_scope: Scope,
    packages: BTreeMap<String, String>,
}

/// Wire shape before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStarterConfig {
    #[serde(default)]
    template_scope: String,
    #[serde(default)]
    packages: BTreeMap<String, String>,
}

impl TryFrom<RawStarterConfig> for StarterConfig {
    type Error = DomainError;

    fn try_from(raw: RawStarterConfig) -> Result<Self, Self::Error> {
        let template_scope = Scope::parse(&raw.template_scope)?;
        Ok(Self::new(template_scope, raw.packages))
    }
}

impl StarterConfig {
    pub fn new(template_scope: Scope, packages: BTreeMap<String, String>) -> Self {
        Self {
            template_scope,
            packages,
        }
    }

    /// Parse and validate a `config.json` document.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| DomainError::InvalidStarterConfig(e.to_string()))
    }

    /// Scope the template's packages are published under.
    pub fn template_scope(&self) -> &Scope {
        &self.template_scope
    }

    pub fn packages(&self) -> &BTreeMap<String, String> {
        &self.packages
    }

    /// Concrete version for `package`. An empty mapping counts as missing.
    pub fn version_of(&self, package: &str) -> Option<&str> {
        self.packages
            .get(package)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
