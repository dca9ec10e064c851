//! CLI surface specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    marinara()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_flag_reports_version() {
    marinara()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("marinara"));
}

#[test]
fn unknown_subcommand_fails() {
    marinara().arg("frobnicate").assert().failure();
}

#[test]
fn run_help_documents_flags() {
    marinara()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-repeat"))
        .stdout(predicate::str::contains("--step"))
        .stdout(predicate::str::contains("--start-at"));
}
