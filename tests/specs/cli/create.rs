// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for issue creation and body resolution.

#![cfg(unix)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

fn created_body(fx: &Fixture) -> String {
    let creates = fx.calls_to("issue", "create");
    assert_eq!(creates.len(), 1, "expected one create call");
    // The call log drops a trailing empty argument.
    creates[0].get(9).cloned().unwrap_or_default()
}

#[test]
fn inline_body() {
    let fx = Fixture::new();
    fx.gt_as("gt1")
        .args(["Fix", "login", "--body", "Steps", "to", "reproduce"])
        .assert()
        .success()
        .stdout(format!("Created: {CREATED_URL}\n"));

    let creates = fx.calls_to("issue", "create");
    assert_eq!(creates[0][5], "Fix login");
    assert_eq!(creates[0][7], "inbox,P1");
    assert_eq!(created_body(&fx), "Steps to reproduce");
}

#[test]
fn body_flag_alone_opens_editor() {
    let fx = Fixture::new().with_editor_text(Some("Written in editor"));
    fx.gt_as("gt2").args(["Task", "-b"]).assert().success();
    assert_eq!(created_body(&fx), "Written in editor");
}

#[test]
fn no_body_flag_means_empty_body() {
    let fx = Fixture::new().with_editor_text(Some("should not be used"));
    fx.gt_as("gt2").arg("Task").assert().success();
    assert_eq!(created_body(&fx), "");
}

#[test]
fn piped_body_wins() {
    let fx = Fixture::new();
    fx.gt_as("gt0")
        .args(["Outage", "--body", "ignored"])
        .write_stdin("  database is down\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("✓ Read 16 bytes from stdin"));
    assert_eq!(created_body(&fx), "database is down");
}

#[test]
fn blank_pipe_fails() {
    let fx = Fixture::new();
    fx.gt_as("gt0")
        .arg("Outage")
        .write_stdin("\n   \n")
        .assert()
        .code(1)
        .stderr("Error: no content provided via stdin\n");
    assert!(fx.calls_to("issue", "create").is_empty());
}

#[test]
fn empty_pipe_fails_even_with_inline_body() {
    let fx = Fixture::new();
    fx.gt_as("gt1")
        .args(["Outage", "--body", "inline"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr("Error: no content provided via stdin\n");
    assert!(fx.calls().is_empty());
}

#[test]
fn title_is_required() {
    let fx = Fixture::new();
    fx.gt_as("gt3")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("issue title required"));
    assert!(fx.calls().is_empty());
}

#[test]
fn failing_editor_aborts_create() {
    let fx = Fixture::new();
    fx.gt_as("gt1")
        .env("EDITOR", "false")
        .args(["Task", "--body"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("editor 'false' exited"));
    assert!(fx.calls_to("issue", "create").is_empty());
}
