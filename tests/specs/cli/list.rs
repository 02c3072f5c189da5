// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for listing: filtering, ordering, verbose rows and colors.

#![cfg(unix)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

fn board() -> Fixture {
    Fixture::new().with_issues(&format!(
        "[{},{},{},{},{}]",
        issue_json(10, "Later P1", &["P1"], "2024-02-01T00:00:00Z"),
        issue_json(11, "Outage", &["P0"], "2024-03-01T00:00:00Z"),
        issue_json(12, "Earlier P1", &["P1", "active"], "2024-01-01T00:00:00Z"),
        issue_json(13, "No label", &["inbox"], "2024-01-05T00:00:00Z"),
        issue_json(14, "Cleanup", &["P3", "active"], "2024-01-02T00:00:00Z"),
    ))
}

#[test]
fn orders_by_priority_then_age() {
    board().gt().assert().success().stdout(
        "11    Outage\n\
         12    Earlier P1\n\
         10    Later P1\n\
         13    No label\n\
         14    Cleanup\n",
    );
}

#[parameterized(
    p1 = { &["p1"], "12    Earlier P1\n10    Later P1\n" },
    active = { &["active"], "12    Earlier P1\n14    Cleanup\n" },
    active_p3 = { &["active", "p3"], "14    Cleanup\n" },
    p2_default_priority_needs_label = { &["p2"], "No issues found\n" },
)]
fn filters(args: &[&str], expected: &str) {
    board().gt().args(args).assert().success().stdout(expected.to_string());
}

#[test]
fn list_verb_accepts_filter_and_verbose_tokens() {
    board()
        .gt()
        .args(["list", "ACTIVE", "-v", "P1"])
        .assert()
        .success()
        .stdout("[012-P1]   Earlier P1\n");
}

#[test]
fn unknown_tokens_are_ignored() {
    board()
        .gt()
        .args(["p0", "whatever"])
        .assert()
        .success()
        .stdout("11    Outage\n");
}

#[test]
fn long_titles_are_truncated_when_piped() {
    let title = "x".repeat(100);
    let fx = Fixture::new().with_issues(&format!(
        "[{}]",
        issue_json(1, &title, &["P2"], "2024-01-01T00:00:00Z")
    ));
    // Piped output falls back to an 80 column terminal: 73 columns of title.
    let expected = format!("1     {}>\n", "x".repeat(72));
    fx.gt().assert().success().stdout(expected);
}

#[test]
fn verbose_rows_are_never_truncated() {
    let title = "y".repeat(100);
    let fx = Fixture::new().with_issues(&format!(
        "[{}]",
        issue_json(1, &title, &["P2"], "2024-01-01T00:00:00Z")
    ));
    fx.gt()
        .arg("-v")
        .assert()
        .success()
        .stdout(format!("[001-P2]   {title}\n"));
}

#[test]
fn colors_without_padding_when_piped() {
    let fx = Fixture::new().with_issues(&format!(
        "[{}]",
        issue_json(3, "Hot", &["P0"], "2024-01-01T00:00:00Z")
    ));
    fx.gt()
        .env_remove("NO_COLOR")
        .assert()
        .success()
        .stdout("\x1b[48;2;18;18;18m\x1b[38;2;215;0;0m3     Hot\x1b[0m\n");
}

#[test]
fn empty_repository() {
    Fixture::new()
        .gt()
        .assert()
        .success()
        .stdout("No issues found\n");
}

#[test]
fn limit_comes_from_config() {
    let fx = Fixture::new();
    fx.write_config("issue_limit = 25\n");
    fx.gt().assert().success();
    let calls = fx.calls_to("issue", "list");
    assert_eq!(
        calls[0],
        [
            "issue",
            "list",
            "--repo",
            REPO,
            "--state",
            "open",
            "--json",
            "number,title,labels,createdAt",
            "--limit",
            "25",
        ]
    );
}

#[test]
fn tracker_failure_surfaces_output() {
    let fx = Fixture::new().with_issues("not json");
    fx.gt()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected tracker response"));
}
