//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// `seedkit new` in `tmp/work` against `tmp/templates/default` and `tmp/config.json`.
fn seedkit_new(tmp: &TempDir) -> Command {
    fs::create_dir_all(tmp.path().join("work")).unwrap();
    let mut cmd = Command::cargo_bin("seedkit").unwrap();
    cmd.current_dir(tmp.path().join("work"))
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .env_remove("RUST_LOG")
        .arg("new")
        .arg("--template-dir")
        .arg(tmp.path().join("templates/default"))
        .arg("--starter-config")
        .arg(tmp.path().join("config.json"));
    cmd
}

fn standard_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "templates/default/package.json",
        r#"{"name":"x3bun","dependencies":{"@x3bun/ui":"config"}}"#,
    );
    write(
        tmp.path(),
        "config.json",
        r#"{"templateScope":"x3bun","packages":{"@myapp/ui":"2.3.1"}}"#,
    );
    tmp
}

#[test]
fn invalid_project_name_exits_2_without_mutation() {
    let tmp = standard_fixture();

    seedkit_new(&tmp)
        .arg("MyApp")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid project name"));

    assert!(!tmp.path().join("work/MyApp").exists());
}

#[test]
fn existing_destination_exits_2() {
    let tmp = standard_fixture();
    fs::create_dir_all(tmp.path().join("work/myapp")).unwrap();
    write(tmp.path(), "work/myapp/keep.txt", "mine");

    seedkit_new(&tmp)
        .arg("myapp")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert!(!tmp.path().join("work/myapp/package.json").exists());
}

#[test]
fn missing_template_exits_3() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "config.json", r#"{"templateScope":"x3bun"}"#);

    seedkit_new(&tmp)
        .arg("myapp")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template directory not found"));

    assert!(!tmp.path().join("work/myapp").exists());
}

#[test]
fn invalid_template_scope_is_fatal_before_mutation() {
    let tmp = standard_fixture();
    write(tmp.path(), "config.json", r#"{"templateScope":"X3 Bun"}"#);

    seedkit_new(&tmp)
        .arg("myapp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid starter configuration"));

    assert!(!tmp.path().join("work/myapp").exists());
}

#[test]
fn missing_starter_config_exits_4() {
    let tmp = standard_fixture();
    fs::remove_file(tmp.path().join("config.json")).unwrap();

    seedkit_new(&tmp)
        .arg("myapp")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("config.json"));
}

#[test]
fn unresolved_version_names_package_and_file() {
    let tmp = standard_fixture();
    write(
        tmp.path(),
        "templates/default/apps/web/package.json",
        r#"{"name":"@x3bun/web","dependencies":{"left-pad":"config"}}"#,
    );

    seedkit_new(&tmp)
        .arg("myapp")
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "missing version mapping for \"left-pad\"",
        ))
        .stderr(predicate::str::contains("package.json"));

    // No rollback: the partial project stays for inspection.
    assert!(tmp.path().join("work/myapp/apps/web/package.json").exists());
}

#[test]
fn malformed_manifest_aborts() {
    let tmp = standard_fixture();
    write(tmp.path(), "templates/default/packages/bad/package.json", "{ nope");

    seedkit_new(&tmp)
        .arg("myapp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed manifest"));
}

#[test]
fn errors_carry_suggestions_and_verbose_hint() {
    let tmp = standard_fixture();
    fs::create_dir_all(tmp.path().join("work/myapp")).unwrap();

    seedkit_new(&tmp)
        .arg("myapp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("--verbose"));
}

#[test]
fn unknown_config_key_exits_4() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin("seedkit")
        .unwrap()
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .args(["config", "get", "nope.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_explicit_settings_file_exits_4() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin("seedkit")
        .unwrap()
        .current_dir(tmp.path())
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn bad_arguments_exit_2() {
    Command::cargo_bin("seedkit")
        .unwrap()
        .args(["new", "--no-such-flag"])
        .assert()
        .code(2);
}
