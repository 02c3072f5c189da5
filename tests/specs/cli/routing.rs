// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for command routing: program names, verbs, numbers and bare words.

#![cfg(unix)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

fn listed() -> Fixture {
    Fixture::new().with_issues(&format!(
        "[{},{}]",
        issue_json(1, "First", &["P2"], "2024-01-01T00:00:00Z"),
        issue_json(2, "Second", &["P1", "active"], "2024-01-02T00:00:00Z"),
    ))
}

#[test]
fn no_arguments_lists_open_issues() {
    let fx = listed();
    fx.gt()
        .assert()
        .success()
        .stdout("2     Second\n1     First\n");
    assert_eq!(fx.calls_to("issue", "list").len(), 1);
}

#[test]
fn leading_flag_lists_verbosely() {
    listed()
        .gt()
        .arg("-v")
        .assert()
        .success()
        .stdout("[002-P1]   Second\n[001-P2]   First\n");
}

#[parameterized(
    help = { "help" },
    long = { "--help" },
    short = { "-h" },
)]
fn help_prints_usage_without_tracker(flag: &str) {
    let fx = Fixture::new();
    fx.gt()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("\x1b").not());
    assert!(fx.calls().is_empty());
}

#[test]
fn shortcut_program_name_creates_with_priority() {
    let fx = Fixture::new();
    fx.gt_as("gt0")
        .args(["list", "is", "broken"])
        .assert()
        .success()
        .stdout(format!("Created: {CREATED_URL}\n"));

    let creates = fx.calls_to("issue", "create");
    assert_eq!(creates.len(), 1);
    assert_eq!(
        creates[0],
        [
            "issue", "create", "--repo", REPO, "--title", "list is broken", "--label", "inbox,P0",
            "--body", "",
        ]
    );
}

#[test]
fn shortcut_argument_creates_with_priority() {
    let fx = Fixture::new();
    fx.gt().args(["gt3", "Someday"]).assert().success();
    let creates = fx.calls_to("issue", "create");
    assert_eq!(creates[0][7], "inbox,P3");
}

#[test]
fn bare_words_create_at_default_priority() {
    let fx = Fixture::new();
    fx.gt()
        .args(["Refactor", "legacy", "code"])
        .assert()
        .success();
    let creates = fx.calls_to("issue", "create");
    assert_eq!(creates[0][5], "Refactor legacy code");
    assert_eq!(creates[0][7], "inbox,P2");
}

#[test]
fn number_views_issue() {
    let fx = Fixture::new().with_view(12, &view_json(12, "Docs", "Write them.", &["P3"]));
    fx.gt()
        .arg("12")
        .assert()
        .success()
        .stdout("#12 - Docs\n\nWrite them.\n");
}

#[test]
fn resolution_error_exits_one_before_tracker() {
    let fx = Fixture::new();
    fx.gt()
        .arg("start")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: issue number required"));
    assert!(fx.calls().is_empty());
}

#[test]
fn missing_repository_has_hint() {
    let fx = Fixture::new();
    fx.gt()
        .env_remove("GT_REPO")
        .env("GIT_DIR", fx.path().join("no-such-repo"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GT_REPO"));
    assert!(fx.calls().is_empty());
}

#[test]
fn repository_from_config_file() {
    let fx = Fixture::new();
    fx.write_config("repo = \"team/board\"\n");
    fx.gt().env_remove("GT_REPO").assert().success();
    assert_eq!(fx.calls()[0][3], "team/board");
}

#[test]
fn broken_config_file_is_reported() {
    let fx = Fixture::new();
    fx.write_config("issue_limit = \"lots\"\n");
    fx.gt()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config error"));
}
