#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DB: &str = "plugin/cursor-positions.json";

fn jumpback_cmd(vault: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("jumpback"));
    cmd.env_remove("JUMPBACK_DB_FILE_NAME")
        .env_remove("JUMPBACK_DELETE_AFTER_DAYS")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(vault.path())
        .arg("--config")
        .arg(vault.path().join("missing.toml"))
        .args(["--db", DB]);
    cmd
}

fn seed(vault: &TempDir) {
    let now = chrono::Utc::now().timestamp_millis();
    let stale = now - 200 * 86_400_000;
    fs::create_dir_all(vault.path().join("plugin")).unwrap();
    fs::write(
        vault.path().join(DB),
        format!(
            r#"{{"notes/a.md":{{"scroll":12.5,"cursor":{{"from":{{"ch":0,"line":9}},"to":{{"ch":0,"line":9}}}},"lastSavedTime":{now}}},"old.md":{{"scroll":1,"lastSavedTime":{stale}}}}}"#
        ),
    )
    .unwrap();
}

fn read_db(vault: &TempDir) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(vault.path().join(DB)).unwrap()).unwrap()
}

#[test]
fn test_naked_invocation_lists_positions() {
    let vault = TempDir::new().unwrap();
    seed(&vault);

    jumpback_cmd(&vault)
        .assert()
        .success()
        .stdout(predicate::str::contains("notes/a.md"))
        .stdout(predicate::str::contains("Line 10"))
        .stdout(predicate::str::contains("old.md"));
}

#[test]
fn test_list_without_database() {
    let vault = TempDir::new().unwrap();

    jumpback_cmd(&vault)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No positions remembered."));
    assert!(!vault.path().join(DB).exists());
}

#[test]
fn test_show_and_unknown_id() {
    let vault = TempDir::new().unwrap();
    seed(&vault);

    jumpback_cmd(&vault)
        .args(["show", "notes/a.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lastSavedTime\""));

    jumpback_cmd(&vault)
        .args(["show", "nope.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No position stored for nope.md"));
}

#[test]
fn test_prune_removes_stale_entries() {
    let vault = TempDir::new().unwrap();
    seed(&vault);

    jumpback_cmd(&vault)
        .arg("prune")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pruned 1 stale entry"));

    let db = read_db(&vault);
    assert!(db.get("old.md").is_none());
    assert!(db.get("notes/a.md").is_some());
}

#[test]
fn test_rename_then_forget_workflow() {
    let vault = TempDir::new().unwrap();
    seed(&vault);

    jumpback_cmd(&vault)
        .args(["mv", "notes/a.md", "archive/a.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved notes/a.md -> archive/a.md"));

    let db = read_db(&vault);
    assert!(db.get("notes/a.md").is_none());
    assert_eq!(db["archive/a.md"]["cursor"]["from"]["line"], 9);

    jumpback_cmd(&vault)
        .args(["forget", "archive/a.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forgot archive/a.md"));

    assert!(read_db(&vault).get("archive/a.md").is_none());
}

#[test]
fn test_config_reflects_db_override() {
    let vault = TempDir::new().unwrap();

    jumpback_cmd(&vault)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(DB))
        .stdout(predicate::str::contains("5000"));
}
