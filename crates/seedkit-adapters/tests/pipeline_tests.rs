//! End-to-end tests of the scaffold pipeline against both filesystem adapters.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

use seedkit_adapters::{LocalFilesystem, MemoryFilesystem};
use seedkit_core::{
    application::{
        ApplicationError, ScaffoldPlan, ScaffoldService, ScopeRewriter, Stage, VersionResolver,
        services::scope_rewriter::MAX_TEXT_FILE_BYTES,
    },
    domain::{DomainError, ProjectName, Scope, ScopeRewrite, StarterConfig},
    error::SeedkitError,
};

fn starter_config() -> StarterConfig {
    StarterConfig::from_json(r#"{"templateScope":"x3bun","packages":{"@myapp/ui":"2.3.1"}}"#)
        .unwrap()
}

fn rewrite(from: &str, to: &str) -> ScopeRewrite {
    ScopeRewrite::new(&Scope::parse(from).unwrap(), &Scope::parse(to).unwrap())
}

fn json_of(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn keys(manifest: &Value, section: &str) -> Vec<String> {
    manifest[section]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect()
}

/// Template from the reference scenario, seeded into a memory filesystem.
fn memory_template() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.add_file(
        "/t/package.json",
        r#"{"name":"x3bun","dependencies":{"@x3bun/ui":"config"}}"#,
    );
    fs.add_file(
        "/t/packages/ui/package.json",
        r#"{"name":"@x3bun/ui","version":"1.0.0"}"#,
    );
    fs
}

// ── Full pipeline ─────────────────────────────────────────────────────────────

#[test]
fn scaffold_on_disk_produces_expected_manifests() {
    let tmp = TempDir::new().unwrap();
    let template = tmp.path().join("templates/default");
    fs::create_dir_all(template.join("packages/ui")).unwrap();
    fs::write(
        template.join("package.json"),
        r#"{"name":"x3bun","dependencies":{"@x3bun/ui":"config"}}"#,
    )
    .unwrap();
    fs::write(
        template.join("packages/ui/package.json"),
        r#"{"name":"@x3bun/ui","version":"1.0.0"}"#,
    )
    .unwrap();

    let destination = tmp.path().join("myapp");
    let plan = ScaffoldPlan::new(ProjectName::parse("myapp").unwrap(), &template, &destination);

    let report = ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .scaffold(&plan, &starter_config())
        .unwrap();

    let root = fs::read_to_string(destination.join("package.json")).unwrap();
    let nested = fs::read_to_string(destination.join("packages/ui/package.json")).unwrap();
    assert_eq!(
        json_of(&root),
        json!({"name": "myapp", "dependencies": {"@myapp/ui": "2.3.1"}})
    );
    assert_eq!(
        json_of(&nested),
        json!({"name": "@myapp/ui", "version": "1.0.0"})
    );

    // Pretty-printed, two-space indent, trailing newline.
    assert!(root.starts_with("{\n  \"name\": \"myapp\""));
    assert!(root.ends_with("}\n"));

    assert_eq!(report.root_package_name, "myapp");
    assert_eq!(report.workspace_scope, "@myapp/*");
    assert_eq!(report.files_copied, 2);
    assert_eq!(report.rewrite.manifests_rescoped, 1);
    assert_eq!(report.resolve.manifests_written, 2);
    assert_eq!(report.resolve.versions_resolved, 1);

    // Template is read-only.
    assert!(
        fs::read_to_string(template.join("package.json"))
            .unwrap()
            .contains("@x3bun/ui")
    );
}

#[test]
fn scaffold_in_memory_reports_stages_in_order() {
    let fs = memory_template();
    let plan = ScaffoldPlan::new(ProjectName::parse("myapp").unwrap(), "/t", "/work/myapp");

    let mut stages = Vec::new();
    ScaffoldService::new(Box::new(fs.clone()))
        .scaffold_with_progress(&plan, &starter_config(), |stage| stages.push(stage))
        .unwrap();

    assert_eq!(
        stages,
        vec![
            Stage::CopyTemplate,
            Stage::RenameRoot,
            Stage::RewriteScope,
            Stage::ResolveVersions,
        ]
    );
    assert_eq!(
        json_of(&fs.read_file("/work/myapp/package.json").unwrap()),
        json!({"name": "myapp", "dependencies": {"@myapp/ui": "2.3.1"}})
    );
}

#[test]
fn existing_destination_is_rejected_without_mutation() {
    let fs = memory_template();
    fs.add_file("/work/myapp/keep.md", "mine");
    let plan = ScaffoldPlan::new(ProjectName::parse("myapp").unwrap(), "/t", "/work/myapp");

    let err = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&plan, &starter_config())
        .unwrap_err();

    assert!(matches!(
        err,
        SeedkitError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert!(fs.writes().is_empty());
    assert!(fs.read_file("/work/myapp/package.json").is_none());
}

#[test]
fn missing_template_creates_nothing() {
    let fs = MemoryFilesystem::new();
    let plan = ScaffoldPlan::new(ProjectName::parse("myapp").unwrap(), "/t", "/work/myapp");

    let err = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&plan, &starter_config())
        .unwrap_err();

    assert!(matches!(
        err,
        SeedkitError::Application(ApplicationError::TemplateNotFound { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn unresolved_placeholder_aborts_after_copy() {
    let fs = memory_template();
    let config = StarterConfig::from_json(r#"{"templateScope":"x3bun"}"#).unwrap();
    let plan = ScaffoldPlan::new(ProjectName::parse("myapp").unwrap(), "/t", "/work/myapp");

    let err = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&plan, &config)
        .unwrap_err();

    match err {
        SeedkitError::Domain(DomainError::UnresolvedVersion { package, path }) => {
            assert_eq!(package, "@myapp/ui");
            assert_eq!(path, PathBuf::from("/work/myapp/package.json"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // No rollback: the copy stays behind.
    assert!(fs.read_file("/work/myapp/packages/ui/package.json").is_some());
}

// ── Scope rewriter ────────────────────────────────────────────────────────────

#[test]
fn equal_scopes_write_nothing() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/package.json", r#"{"name":"x3bun"}"#);
    fs.add_file(
        "/p/packages/ui/package.json",
        r#"{"name":"@x3bun/ui","dependencies":{"@x3bun/core":"1.0.0"}}"#,
    );
    fs.add_file("/p/README.md", "Uses @x3bun/ui.");

    let stats = ScopeRewriter::new(&fs)
        .rewrite(Path::new("/p"), &rewrite("x3bun", "x3bun"))
        .unwrap();

    assert_eq!(stats.manifests_rescoped, 0);
    assert_eq!(stats.text_files_rewritten, 0);
    assert!(fs.writes().is_empty());
}

#[test]
fn only_the_leading_prefix_is_renamed() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/package.json", r#"{"name":"root"}"#);
    fs.add_file(
        "/p/packages/a/package.json",
        r#"{"name":"@old/a","devDependencies":{"@old/foo-old":"1.0.0","old":"2.0.0"}}"#,
    );

    ScopeRewriter::new(&fs)
        .rewrite(Path::new("/p"), &rewrite("old", "new"))
        .unwrap();

    let manifest = json_of(&fs.read_file("/p/packages/a/package.json").unwrap());
    assert_eq!(manifest["name"], "@new/a");
    assert_eq!(keys(&manifest, "devDependencies"), vec!["@new/foo-old", "old"]);
}

#[test]
fn free_text_pass_rewrites_prose_and_sources_verbatim() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/package.json", r#"{"name":"root"}"#);
    fs.add_file("/p/README.md", "Install @x3bun/ui\r\nthen @x3bun/core.");
    fs.add_file("/p/apps/web/app.tsx", "import { Button } from '@x3bun/ui';\n");
    fs.add_file("/p/logo.svg", "<!-- @x3bun/ui -->");
    fs.add_file("/p/notes.md", "nothing to see");

    let stats = ScopeRewriter::new(&fs)
        .rewrite(Path::new("/p"), &rewrite("x3bun", "myapp"))
        .unwrap();

    assert_eq!(
        fs.read_file("/p/README.md").unwrap(),
        "Install @myapp/ui\r\nthen @myapp/core."
    );
    assert_eq!(
        fs.read_file("/p/apps/web/app.tsx").unwrap(),
        "import { Button } from '@myapp/ui';\n"
    );
    assert_eq!(fs.read_file("/p/logo.svg").unwrap(), "<!-- @x3bun/ui -->");
    assert_eq!(fs.write_count("/p/notes.md"), 0);
    assert_eq!(stats.text_files_rewritten, 2);
}

#[test]
fn excluded_directories_are_never_rewritten() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/package.json", r#"{"name":"root"}"#);
    fs.add_file(
        "/p/node_modules/@x3bun/ui/package.json",
        r#"{"name":"@x3bun/ui"}"#,
    );
    fs.add_file(
        "/p/apps/web/node_modules/x/index.js",
        "require('@x3bun/ui')",
    );
    fs.add_file("/p/.git/description.md", "@x3bun/");
    fs.add_file("/p/packages/ui/.turbo/turbo-build.md", "@x3bun/ui");

    ScopeRewriter::new(&fs)
        .rewrite(Path::new("/p"), &rewrite("x3bun", "myapp"))
        .unwrap();
    VersionResolver::new(&fs)
        .resolve(Path::new("/p"), &starter_config())
        .unwrap();

    assert_eq!(fs.writes(), vec![PathBuf::from("/p/package.json")]);
    assert_eq!(
        fs.read_file("/p/node_modules/@x3bun/ui/package.json").unwrap(),
        r#"{"name":"@x3bun/ui"}"#
    );
}

#[test]
fn oversized_text_files_are_left_alone() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/package.json", r#"{"name":"root"}"#);

    let mut big = String::from("@x3bun/ui ");
    big.push_str(&"x".repeat(MAX_TEXT_FILE_BYTES as usize));
    fs.add_file("/p/big.md", big.clone());

    let mut at_limit = String::from("@x3bun/ui ");
    at_limit.push_str(&"x".repeat(MAX_TEXT_FILE_BYTES as usize - at_limit.len()));
    fs.add_file("/p/at-limit.md", at_limit);

    let stats = ScopeRewriter::new(&fs)
        .rewrite(Path::new("/p"), &rewrite("x3bun", "myapp"))
        .unwrap();

    assert_eq!(stats.oversized_skipped, 1);
    assert_eq!(fs.write_count("/p/big.md"), 0);
    assert_eq!(fs.read_file("/p/big.md").unwrap(), big);
    assert!(
        fs.read_file("/p/at-limit.md")
            .unwrap()
            .starts_with("@myapp/ui ")
    );
}

#[test]
fn non_utf8_text_files_are_skipped() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/package.json", r#"{"name":"root"}"#);
    // Latin-1 "café" after the old prefix: the prefix is there, the text is not UTF-8.
    let latin1 = b"import \"@x3bun/caf\xe9\";\n".to_vec();
    fs.add_file("/p/latin1.md", latin1.clone());
    fs.add_file("/p/readme.md", "see @x3bun/ui\n");

    ScopeRewriter::new(&fs)
        .rewrite(Path::new("/p"), &rewrite("x3bun", "myapp"))
        .unwrap();

    assert_eq!(fs.write_count("/p/latin1.md"), 0);
    assert_eq!(fs.read_bytes("/p/latin1.md").unwrap(), latin1);
    // The rest of the tree is still rewritten.
    assert_eq!(fs.read_file("/p/readme.md").unwrap(), "see @myapp/ui\n");
}

#[test]
fn malformed_manifest_aborts_but_keeps_earlier_rewrites() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/p/package.json", r#"{"name":"root"}"#);
    fs.add_file("/p/packages/a/package.json", r#"{"name":"@x3bun/a"}"#);
    fs.add_file("/p/packages/b/package.json", "{ not json");

    let err = ScopeRewriter::new(&fs)
        .rewrite(Path::new("/p"), &rewrite("x3bun", "myapp"))
        .unwrap_err();

    match err {
        SeedkitError::Domain(DomainError::MalformedManifest { path, .. }) => {
            assert_eq!(path, PathBuf::from("/p/packages/b/package.json"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs.write_count("/p/packages/a/package.json"), 1);
}

// ── Version resolver ──────────────────────────────────────────────────────────

#[test]
fn placeholders_are_resolved_in_every_section() {
    let fs = MemoryFilesystem::new();
    fs.add_file(
        "/p/package.json",
        r#"{
            "name": "myapp",
            "dependencies": { "react": "config" },
            "devDependencies": { "@myapp/ui": "config" },
            "peerDependencies": { "react-dom": "config" },
            "optionalDependencies": { "fsevents": "config" },
            "resolutions": { "typescript": "config" }
        }"#,
    );
    let config = StarterConfig::from_json(
        r#"{"templateScope":"x3bun","packages":{
            "react":"^19.0.0","@myapp/ui":"2.3.1","react-dom":"^19.0.0",
            "fsevents":"2.3.3","typescript":"5.6.3"
        }}"#,
    )
    .unwrap();

    let stats = VersionResolver::new(&fs)
        .resolve(Path::new("/p"), &config)
        .unwrap();

    assert_eq!(stats.versions_resolved, 5);
    let raw = fs.read_file("/p/package.json").unwrap();
    assert!(!raw.contains("\"config\""));
    let manifest = json_of(&raw);
    assert_eq!(manifest["resolutions"]["typescript"], "5.6.3");
    assert_eq!(manifest["devDependencies"]["@myapp/ui"], "2.3.1");
}

#[test]
fn missing_mapping_fails_before_writing_that_file() {
    let fs = MemoryFilesystem::new();
    fs.add_file(
        "/p/package.json",
        r#"{"name":"myapp","dependencies":{"@myapp/ui":"config","left-pad":"config"}}"#,
    );

    let err = VersionResolver::new(&fs)
        .resolve(Path::new("/p"), &starter_config())
        .unwrap_err();

    assert!(err.to_string().contains("\"left-pad\""));
    assert!(err.to_string().contains("package.json"));
    assert_eq!(fs.write_count("/p/package.json"), 0);
}

#[test]
fn resolved_sections_are_sorted() {
    let fs = MemoryFilesystem::new();
    fs.add_file(
        "/p/package.json",
        r#"{"name":"myapp","dependencies":{"zod":"3.0.0","Alpha":"1.0.0","@myapp/ui":"config","beta":"1.0.0"}}"#,
    );

    VersionResolver::new(&fs)
        .resolve(Path::new("/p"), &starter_config())
        .unwrap();

    let manifest = json_of(&fs.read_file("/p/package.json").unwrap());
    assert_eq!(
        keys(&manifest, "dependencies"),
        vec!["@myapp/ui", "Alpha", "beta", "zod"]
    );
}

#[test]
fn invalid_project_names_are_rejected() {
    for name in ["MyApp", "-app", "my app", "", "@scope/app"] {
        assert!(ProjectName::parse(name).is_err(), "accepted {name:?}");
    }
}
