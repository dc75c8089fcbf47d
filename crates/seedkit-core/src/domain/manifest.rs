//! `package.json` manifests and the transforms applied to them.
//!
//! A [`Manifest`] wraps the parsed JSON object together with the path it was
//! read from (used for error reporting only). Top-level key order is kept as
//! it was in the file; the dependency sections are re-sorted by
//! [`Manifest::sort_sections`].
//!
//! No I/O happens here. Reading and writing belong to the application
//! services.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::{
    StarterConfig, collation::locale_cmp, error::DomainError, value_objects::ScopeRewrite,
};

/// Placeholder version meaning "take this from the starter config".
pub const SENTINEL_VERSION: &str = "config";

/// The dependency-like sections of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
    PeerDependencies,
    OptionalDependencies,
    Resolutions,
}

impl DependencySection {
    /// Sections whose keys are renamed by the scope rewrite.
    pub const RENAMED: [Self; 4] = [
        Self::Dependencies,
        Self::DevDependencies,
        Self::PeerDependencies,
        Self::OptionalDependencies,
    ];

    /// Sections whose versions are resolved and whose keys are sorted.
    pub const ALL: [Self; 5] = [
        Self::Dependencies,
        Self::DevDependencies,
        Self::PeerDependencies,
        Self::OptionalDependencies,
        Self::Resolutions,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
            Self::PeerDependencies => "peerDependencies",
            Self::OptionalDependencies => "optionalDependencies",
            Self::Resolutions => "resolutions",
        }
    }
}

/// A parsed `package.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    doc: Map<String, Value>,
}

impl Manifest {
    /// Parse manifest text. Anything other than a JSON object is malformed.
    pub fn parse(path: impl Into<PathBuf>, raw: &str) -> Result<Self, DomainError> {
        let path = path.into();
        let value: Value = serde_json::from_str(raw).map_err(|e| DomainError::MalformedManifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        match value {
            Value::Object(doc) => Ok(Self { path, doc }),
            other => Err(DomainError::MalformedManifest {
                path,
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `name` field, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.doc.get("name").and_then(Value::as_str)
    }

    /// Overwrite (or insert) the `name` field.
    pub fn set_name(&mut self, name: &str) {
        self.doc.insert("name".into(), Value::String(name.to_string()));
    }

    /// A section as an object, if present and well-formed.
    pub fn section(&self, section: DependencySection) -> Option<&Map<String, Value>> {
        self.doc.get(section.key()).and_then(Value::as_object)
    }

    fn section_mut(&mut self, section: DependencySection) -> Option<&mut Map<String, Value>> {
        self.doc.get_mut(section.key()).and_then(Value::as_object_mut)
    }

    /// Move the manifest onto a new scope.
    ///
    /// 1. `name` is renamed when it starts with the old prefix.
    /// 2. Keys of the four dependency sections are renamed the same way;
    ///    values are never touched.
    /// 3. Any remaining mention of the old prefix (nested config values such
    ///    as `"prettier": "@x3bun/prettier/next"`) is replaced textually.
    pub fn rescope(&mut self, rewrite: &ScopeRewrite) -> Result<(), DomainError> {
        if rewrite.is_noop() {
            return Ok(());
        }

        if let Some(renamed) = self.name().and_then(|n| rewrite.rename_identifier(n)) {
            self.set_name(&renamed);
        }

        for section in DependencySection::RENAMED {
            if let Some(entries) = self.section_mut(section) {
                *entries = rename_keys(std::mem::take(entries), rewrite);
            }
        }

        let serialized = self.to_compact_string()?;
        if rewrite.occurs_in(&serialized) {
            let replaced = rewrite.replace_all(&serialized);
            *self = Self::parse(self.path.clone(), &replaced)?;
        }

        Ok(())
    }

    /// Replace every `"config"` version with the value from `config`.
    ///
    /// Fails on the first package that has no mapping; the manifest may then
    /// be partially resolved and must not be written. Returns how many
    /// versions were substituted.
    pub fn resolve_versions(&mut self, config: &StarterConfig) -> Result<usize, DomainError> {
        let mut resolved = 0;

        for section in DependencySection::ALL {
            let path = self.path.clone();
            let Some(entries) = self.section_mut(section) else {
                continue;
            };

            for (package, version) in entries.iter_mut() {
                if version.as_str() != Some(SENTINEL_VERSION) {
                    continue;
                }
                let concrete =
                    config
                        .version_of(package)
                        .ok_or_else(|| DomainError::UnresolvedVersion {
                            package: package.clone(),
                            path: path.clone(),
                        })?;
                *version = Value::String(concrete.to_string());
                resolved += 1;
            }
        }

        Ok(resolved)
    }

    /// Sort the keys of every present section with [`locale_cmp`].
    pub fn sort_sections(&mut self) {
        for section in DependencySection::ALL {
            if let Some(entries) = self.section_mut(section) {
                let mut pairs: Vec<(String, Value)> = std::mem::take(entries).into_iter().collect();
                pairs.sort_by(|(a, _), (b, _)| locale_cmp(a, b));
                *entries = pairs.into_iter().collect();
            }
        }
    }

    /// Pretty-printed JSON (2-space indent) with a trailing newline.
    ///
    /// Floats keep a fractional part: `1.0` is written back as `1.0`, not `1`.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut out = serde_json::to_string_pretty(&self.doc).map_err(|e| self.malformed(e))?;
        out.push('\n');
        Ok(out)
    }

    fn to_compact_string(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.doc).map_err(|e| self.malformed(e))
    }

    fn malformed(&self, e: serde_json::Error) -> DomainError {
        DomainError::MalformedManifest {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

/// Rebuild a section, renaming scoped keys. Later duplicates overwrite the
/// value but keep the position of the first occurrence.
fn rename_keys(entries: Map<String, Value>, rewrite: &ScopeRewrite) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| match rewrite.rename_identifier(&key) {
            Some(renamed) => (renamed, value),
            None => (key, value),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
