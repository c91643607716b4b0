//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trackctl(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trackctl").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("TRACKCTL_HTTP_ADDR")
        .env_remove("TRACKCTL_GRPC_ADDR")
        .current_dir(home.path());
    cmd
}

// === Help Output ===

#[test]
fn test_top_level_help() {
    let home = TempDir::new().unwrap();
    trackctl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help_lists_surfaces() {
    let home = TempDir::new().unwrap();
    trackctl(&home)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graphql"))
        .stdout(predicate::str::contains("--grpc-addr"))
        .stdout(predicate::str::contains("TRACKCTL_HTTP_ADDR"));
}

#[test]
fn test_serve_rejects_unknown_surface() {
    let home = TempDir::new().unwrap();
    trackctl(&home)
        .args(["serve", "soap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// === Config Command ===

#[test]
fn test_config_path_under_home() {
    let home = TempDir::new().unwrap();
    trackctl(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".trackctl"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    trackctl(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".trackctl/config.toml").exists());

    trackctl(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    trackctl(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_merges_local_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("trackctl.toml"),
        "[server]\nhttp_addr = \"0.0.0.0:8080\"\n",
    )
    .unwrap();

    trackctl(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8080"));
}

// === Completions ===

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    trackctl(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trackctl"));
}
