//! Domain value objects: ProjectName, Scope, ScopeRewrite.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Construction validates the grammar once so the rest of the pipeline can
//! rely on the invariant without re-checking.
//!
//! | Type          | Grammar                  |
//! |---------------|--------------------------|
//! | `ProjectName` | `^[a-z0-9][a-z0-9._-]*$` |
//! | `Scope`       | `^[a-z0-9._-]+$`         |

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Characters allowed after the first position of a name or anywhere in a scope.
fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')
}

// ── ProjectName ───────────────────────────────────────────────────────────────

/// Name of the generated project.
///
/// Doubles as the root package name and as the workspace scope, so it has to
/// be a valid npm scope name as well as a directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse a user-supplied name. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("name cannot be empty"));
        };
        if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
            return Err(invalid("must start with a lowercase letter or a digit"));
        }
        if let Some(bad) = chars.find(|c| !is_name_char(*c)) {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The workspace scope derived from this name (`myapp` → `@myapp/`).
    pub fn scope(&self) -> Scope {
        // The project grammar is a strict subset of the scope grammar.
        Scope(self.0.clone())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProjectName> for String {
    fn from(value: ProjectName) -> Self {
        value.0
    }
}

// ── Scope ─────────────────────────────────────────────────────────────────────

/// A package namespace, stored without the leading `@` or trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scope(String);

impl Scope {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::InvalidScope {
                scope: raw.to_string(),
                reason: "scope cannot be empty".into(),
            });
        }
        if let Some(bad) = raw.chars().find(|c| !is_name_char(*c)) {
            return Err(DomainError::InvalidScope {
                scope: raw.to_string(),
                reason: format!("character '{bad}' is not allowed"),
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// Bare scope name, e.g. `x3bun`.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Identifier prefix, e.g. `@x3bun/`.
    pub fn prefix(&self) -> String {
        format!("@{}/", self.0)
    }

    /// Wildcard form used in status output, e.g. `@x3bun/*`.
    pub fn wildcard(&self) -> String {
        format!("@{}/*", self.0)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Scope {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Scope> for String {
    fn from(value: Scope) -> Self {
        value.0
    }
}

// ── ScopeRewrite ──────────────────────────────────────────────────────────────

/// An `@from/` → `@to/` substitution.
///
/// Holds the rendered prefixes so the hot loops over files and keys don't
/// re-format them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeRewrite {
    from: String,
    to: String,
}

impl ScopeRewrite {
    pub fn new(from: &Scope, to: &Scope) -> Self {
        Self {
            from: from.prefix(),
            to: to.prefix(),
        }
    }

    pub fn from_prefix(&self) -> &str {
        &self.from
    }

    pub fn to_prefix(&self) -> &str {
        &self.to
    }

    /// `true` when both scopes are the same and nothing would change.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Whether `text` mentions the old prefix anywhere.
    pub fn occurs_in(&self, text: &str) -> bool {
        !self.is_noop() && text.contains(&self.from)
    }

    /// Rename an identifier that *starts* with the old prefix.
    ///
    /// Only the leading prefix is replaced; `@old/foo-old` becomes
    /// `@new/foo-old`. Returns `None` when the identifier is not scoped.
    pub fn rename_identifier(&self, identifier: &str) -> Option<String> {
        if self.is_noop() {
            return None;
        }
        identifier
            .strip_prefix(self.from.as_str())
            .map(|rest| format!("{}{rest}", self.to))
    }

    /// Replace every occurrence of the old prefix, wherever it appears.
    pub fn replace_all<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.occurs_in(text) {
            Cow::Owned(text.replace(&self.from, &self.to))
        } else {
            Cow::Borrowed(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(from: &str, to: &str) -> ScopeRewrite {
        ScopeRewrite::new(&Scope::parse(from).unwrap(), &Scope::parse(to).unwrap())
    }

    // ── ProjectName ──────────────────────────────────────────────────────────

    #[test]
    fn valid_project_names_parse() {
        for name in ["myapp", "my-app", "my_app", "app.web", "0day", "a"] {
            assert!(ProjectName::parse(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn project_name_is_trimmed() {
        assert_eq!(ProjectName::parse("  myapp \n").unwrap().as_str(), "myapp");
    }

    #[test]
    fn empty_project_name_is_rejected() {
        assert!(matches!(
            ProjectName::parse("   "),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn project_name_must_start_alphanumeric() {
        for name in [".hidden", "-app", "_app"] {
            assert!(ProjectName::parse(name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn project_name_rejects_uppercase_and_separators() {
        for name in ["MyApp", "my app", "a/b", "@scope", "café"] {
            assert!(ProjectName::parse(name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn project_name_yields_matching_scope() {
        let name = ProjectName::parse("myapp").unwrap();
        assert_eq!(name.scope().prefix(), "@myapp/");
    }

    // ── Scope ────────────────────────────────────────────────────────────────

    #[test]
    fn scope_allows_leading_punctuation() {
        assert!(Scope::parse(".x3bun").is_ok());
        assert!(Scope::parse("-x").is_ok());
    }

    #[test]
    fn scope_rejects_empty_and_at_sign() {
        assert!(Scope::parse("").is_err());
        assert!(Scope::parse("@x3bun").is_err());
        assert!(Scope::parse("X3bun").is_err());
    }

    #[test]
    fn scope_renders_prefix_and_wildcard() {
        let scope = Scope::parse("x3bun").unwrap();
        assert_eq!(scope.prefix(), "@x3bun/");
        assert_eq!(scope.wildcard(), "@x3bun/*");
        assert_eq!(scope.to_string(), "@x3bun");
    }

    #[test]
    fn scope_deserializes_with_validation() {
        let ok: Scope = serde_json::from_str("\"x3bun\"").unwrap();
        assert_eq!(ok.name(), "x3bun");
        assert!(serde_json::from_str::<Scope>("\"Bad Scope\"").is_err());
    }

    // ── ScopeRewrite ─────────────────────────────────────────────────────────

    #[test]
    fn rename_replaces_only_the_leading_prefix() {
        let rw = rewrite("oldscope", "newscope");
        assert_eq!(
            rw.rename_identifier("@oldscope/foo-oldscope").as_deref(),
            Some("@newscope/foo-oldscope")
        );
    }

    #[test]
    fn rename_ignores_unscoped_and_mid_string_matches() {
        let rw = rewrite("x3bun", "myapp");
        assert_eq!(rw.rename_identifier("react"), None);
        assert_eq!(rw.rename_identifier("prefix-@x3bun/ui"), None);
    }

    #[test]
    fn replace_all_is_global() {
        let rw = rewrite("x3bun", "myapp");
        assert_eq!(
            rw.replace_all("import '@x3bun/ui'; import '@x3bun/db';"),
            "import '@myapp/ui'; import '@myapp/db';"
        );
    }

    #[test]
    fn replace_all_borrows_when_absent() {
        let rw = rewrite("x3bun", "myapp");
        assert!(matches!(rw.replace_all("nothing here"), Cow::Borrowed(_)));
    }

    #[test]
    fn equal_scopes_are_noop() {
        let rw = rewrite("x3bun", "x3bun");
        assert!(rw.is_noop());
        assert!(!rw.occurs_in("@x3bun/ui"));
        assert_eq!(rw.rename_identifier("@x3bun/ui"), None);
    }
}
