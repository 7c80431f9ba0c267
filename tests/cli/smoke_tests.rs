use predicates::prelude::*;

use crate::common::Workspace;

#[test]
fn shows_help() {
    Workspace::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan").and(predicate::str::contains("compare")));
}

#[test]
fn shows_version() {
    Workspace::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    Workspace::new().cmd().arg("frobnicate").assert().code(2);
}
