// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for editing titles and bodies.

#![cfg(unix)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

fn with_issue() -> Fixture {
    Fixture::new().with_view(42, &view_json(42, "Old title", "Old body", &["P1"]))
}

#[test]
fn inline_title_does_not_fetch() {
    let fx = with_issue();
    fx.gt()
        .args(["42", "-e", "title", "New", "title"])
        .assert()
        .success()
        .stdout("Updated title for issue #42\n");

    assert!(fx.calls_to("issue", "view").is_empty());
    assert_eq!(
        fx.calls_to("issue", "edit"),
        vec![vec!["issue", "edit", "42", "--repo", REPO, "--title", "New title"]]
    );
}

#[test]
fn piped_body() {
    let fx = with_issue();
    fx.gt()
        .args(["42", "--edit", "body"])
        .write_stdin("Fresh body\n")
        .assert()
        .success();
    let edits = fx.calls_to("issue", "edit");
    assert_eq!(edits[0][5..], ["--body", "Fresh body"]);
}

#[test]
fn editor_change_is_applied() {
    let fx = with_issue().with_editor_text(Some("New body"));
    fx.gt()
        .args(["42", "-e", "body"])
        .assert()
        .success()
        .stdout("Updated body for issue #42\n");
    assert_eq!(fx.calls_to("issue", "view").len(), 1);
    assert_eq!(fx.calls_to("issue", "edit")[0][6], "New body");
}

#[test]
fn untouched_editor_makes_no_change() {
    let fx = with_issue();
    fx.gt()
        .args(["42", "-e", "title"])
        .assert()
        .success()
        .stdout("No changes made\n");
    assert!(fx.calls_to("issue", "edit").is_empty());
}

#[test]
fn edit_verb_form() {
    let fx = with_issue();
    fx.gt()
        .args(["edit", "42", "-e", "body", "Via", "verb"])
        .assert()
        .success();
    assert_eq!(fx.calls_to("issue", "edit")[0][6], "Via verb");
}

#[parameterized(
    invalid_field = { &["42", "-e", "labels"], "invalid field: labels" },
    missing_field = { &["42", "-e"], "requires field argument" },
    missing_flag = { &["edit", "42"], "-e flag required" },
)]
fn argument_errors(args: &[&str], message: &str) {
    let fx = with_issue();
    fx.gt()
        .args(args)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(message));
    assert!(fx.calls().is_empty());
}
