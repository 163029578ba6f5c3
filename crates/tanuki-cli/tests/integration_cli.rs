//! End-to-end tests for the `tanuki` binary.
//!
//! Only paths that need no JavaScript toolchain run here: `docs` reads an
//! existing reflection file through `--reflection`.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tanuki(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tanuki"));
    cmd.arg("--cwd")
        .arg(cwd)
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .env_remove("TANUKI_NAME")
        .env_remove("TANUKI_BUILD__MODE");
    cmd
}

fn write_reflection(dir: &Path) {
    let reflection = json!({
        "id": 0,
        "name": "demo",
        "kindString": "Project",
        "children": [
            {
                "id": 1,
                "name": "greet",
                "kindString": "Function",
                "signatures": [{
                    "id": 2,
                    "name": "greet",
                    "kindString": "Call signature",
                    "parameters": [{
                        "id": 3,
                        "name": "name",
                        "kindString": "Parameter",
                        "type": { "type": "intrinsic", "name": "string" }
                    }],
                    "type": { "type": "intrinsic", "name": "void" }
                }]
            },
            {
                "id": 4,
                "name": "VERSION",
                "kindString": "Variable",
                "type": { "type": "intrinsic", "name": "string" },
                "defaultValue": "\"1.0.0\""
            }
        ]
    });
    fs::write(
        dir.join("reflection.json"),
        serde_json::to_string_pretty(&reflection).unwrap(),
    )
    .unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn help_lists_commands() {
    Command::new(env!("CARGO_BIN_EXE_tanuki"))
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("build")
                .and(predicate::str::contains("lint"))
                .and(predicate::str::contains("docs")),
        );
}

#[test]
fn docs_from_reflection_file() {
    let dir = TempDir::new().unwrap();
    write_reflection(dir.path());

    tanuki(dir.path())
        .args(["docs", "--reflection", "reflection.json"])
        .assert()
        .success();

    let document = read_json(&dir.path().join("docs").join("docs.json"));
    assert_eq!(document["format_version"], 1);
    assert_eq!(document["workspaces"], false);

    let children = document["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["name"], "greet");
    assert_eq!(children[0]["kind"], "Function");
    assert_eq!(
        children[0]["signatures"][0]["as_string"],
        "greet(name: string): void"
    );
    assert_eq!(children[1]["name"], "VERSION");
}

#[test]
fn docs_output_from_config_and_flag() {
    let dir = TempDir::new().unwrap();
    write_reflection(dir.path());
    fs::write(
        dir.path().join(".tanukirc.json"),
        r#"{ "name": "demo", "typedoc": { "out": "api/docs.json" } }"#,
    )
    .unwrap();

    tanuki(dir.path())
        .args(["docs", "--reflection", "reflection.json"])
        .assert()
        .success();
    assert!(dir.path().join("api").join("docs.json").is_file());

    tanuki(dir.path())
        .args(["docs", "--reflection", "reflection.json", "--out", "site/docs.json"])
        .assert()
        .success();
    assert!(dir.path().join("site").join("docs.json").is_file());
}

#[test]
fn docs_in_workspace_mode_fails() {
    let dir = TempDir::new().unwrap();
    write_reflection(dir.path());
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "demo", "tanuki": { "typedoc": { "workspaces": true } } }"#,
    )
    .unwrap();

    tanuki(dir.path())
        .args(["docs", "--reflection", "reflection.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));

    assert!(!dir.path().join("docs").join("docs.json").exists());
}

#[test]
fn docs_with_missing_reflection_fails() {
    let dir = TempDir::new().unwrap();

    tanuki(dir.path())
        .args(["docs", "--reflection", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Documentation was not generated"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();

    tanuki(dir.path())
        .args(["--config", "nope.json", "docs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn conflicting_flags_are_rejected() {
    let dir = TempDir::new().unwrap();

    tanuki(dir.path())
        .args(["lint", "--fix", "--no-fix"])
        .assert()
        .failure()
        .code(2);

    tanuki(dir.path())
        .args(["build", "--mode", "daemon"])
        .assert()
        .failure()
        .code(2);
}
