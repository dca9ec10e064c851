//! `marinara check` specs
//!
//! Verify format validation output and error reporting.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn check_accepts_a_plain_period_list() {
    marinara()
        .args(["check", "A:10,B:5,C:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. A: 10 minutes"))
        .stdout(predicate::str::contains("3. C: 15 minutes"))
        .stdout(predicate::str::contains("Summary: 10, 5, 15"));
}

#[test]
fn check_expands_groups_round_robin() {
    marinara()
        .args(["check", "(3xA:10,B:5),C:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 10, 5, 10, 5, 10, 5, 15"))
        .stdout(predicate::str::contains("7. C: 15 minutes"));
}

#[test]
fn check_drops_zero_duration_periods() {
    marinara()
        .args(["check", "A:0,B:5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. B: 5 minutes"))
        .stdout(predicate::str::contains("Summary: 5"));
}

#[test]
fn check_renders_underscores_as_spaces() {
    marinara()
        .args(["check", "Long_Break:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Long Break: 15 minutes"));
}

#[test]
fn check_without_a_format_uses_the_default() {
    marinara()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Long Break: 15 minutes"))
        .stdout(predicate::str::contains("Summary: 25, 5, 25, 5, 25, 5, 25, 5, 15"));
}

#[test]
fn check_rejects_a_segment_without_separator() {
    marinara()
        .args(["check", "A10,B:5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs exactly one ':'"));
}

#[test]
fn check_rejects_non_integer_durations() {
    marinara()
        .args(["check", "A:ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a whole number of minutes"));
}

#[test]
fn check_rejects_unmatched_parentheses() {
    marinara()
        .args(["check", "(2xA:5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched parentheses"));
}

#[test]
fn check_rejects_a_group_without_count() {
    marinara()
        .args(["check", "(A:10,B:5)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed repetition group"));
}

#[test]
fn check_rejects_an_all_zero_schedule() {
    marinara()
        .args(["check", "A:0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yields no periods"));
}
