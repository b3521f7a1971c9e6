//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("itemstore").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("itemstore").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn test_serve_without_database_fails() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("itemstore").unwrap();
    cmd.current_dir(dir)
        .env_remove("DATABASE_URL")
        .arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("itemstore").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
