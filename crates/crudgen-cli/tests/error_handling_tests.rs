//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn crudgen() -> Command {
    let mut cmd = Command::cargo_bin("crudgen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("CRUDGEN_SKELETON_DIR");
    cmd
}

#[test]
fn invalid_entity_name_shows_examples() {
    crudgen()
        .args(["generate", "9Bad", "--module-name", "App", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid entity name"))
        .stderr(predicate::str::contains("Blog/Post"));
}

#[test]
fn composite_identifier_suggests_single_id() {
    let temp = TempDir::new().unwrap();
    let skel = temp.path().join("skel");
    crudgen()
        .args(["init", "--skeleton-dir"])
        .arg(&skel)
        .assert()
        .success();

    crudgen()
        .arg("generate")
        .arg("Post")
        .args(["--module-name", "App"])
        .arg("--module-root")
        .arg(temp.path().join("app"))
        .arg("--skeleton-dir")
        .arg(&skel)
        .args(["--id-field", "id", "--id-field", "tenant", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("composite primary keys"))
        .stderr(predicate::str::contains("single identifier field named `id`"));
}

#[test]
fn missing_skeletons_suggest_init() {
    let temp = TempDir::new().unwrap();

    crudgen()
        .arg("generate")
        .arg("Post")
        .args(["--module-name", "App"])
        .arg("--module-root")
        .arg(temp.path().join("app"))
        .arg("--skeleton-dir")
        .arg(temp.path().join("nowhere"))
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("crudgen init"));
}

#[test]
fn unknown_config_key_is_a_configuration_error() {
    crudgen()
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
