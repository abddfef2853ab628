//! CLI surface tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_serve_subcommand() {
    Command::cargo_bin("taskpad")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn version_prints_crate_version() {
    Command::cargo_bin("taskpad")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn serve_help_shows_flags() {
    Command::cargo_bin("taskpad")
        .unwrap()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("taskpad")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
