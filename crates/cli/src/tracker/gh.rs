// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! [`Tracker`] backed by the `gh` command-line client.

use std::process::Command;

use gt_core::{Issue, IssueDetail};
use serde::Deserialize;

use super::{Change, LabelSpec, Tracker};
use crate::error::{Error, Result};

const ISSUE_LIST_FIELDS: &str = "number,title,labels,createdAt";
const ISSUE_VIEW_FIELDS: &str = "number,title,body,labels";

/// Runs `gh` as a child process and captures its output.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
}

impl Default for GhCli {
    fn default() -> Self {
        GhCli::new("gh")
    }
}

impl GhCli {
    pub fn new(program: impl Into<String>) -> Self {
        GhCli {
            program: program.into(),
        }
    }

    fn run(&self, args: &[String], action: &'static str) -> Result<String> {
        tracing::debug!(program = %self.program, ?args, "running tracker client");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(Error::TrackerUnavailable)?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(Error::TrackerFailed {
                action,
                status: output.status,
                output: combined.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::trace!(bytes = stdout.len(), "tracker client output");
        Ok(stdout)
    }
}

impl Tracker for GhCli {
    fn list_open_issues(&self, repo: &str, limit: usize) -> Result<Vec<Issue>> {
        let json = self.run(&list_args(repo, limit), "listing issues")?;
        Ok(Issue::parse_list(&json)?)
    }

    fn view_issue(&self, repo: &str, number: u64) -> Result<IssueDetail> {
        let json = self.run(&view_args(repo, number), "viewing issue")?;
        Ok(IssueDetail::parse(&json)?)
    }

    fn apply_change(&self, repo: &str, change: &Change) -> Result<String> {
        let output = self.run(&change_args(repo, change), change.action())?;
        Ok(output.trim().to_string())
    }

    fn list_labels(&self, repo: &str) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct Named {
            name: String,
        }

        let json = self.run(&label_list_args(repo), "listing labels")?;
        let labels: Vec<Named> = serde_json::from_str(&json)?;
        Ok(labels.into_iter().map(|l| l.name).collect())
    }

    fn create_label(&self, repo: &str, label: &LabelSpec) -> Result<()> {
        self.run(&label_create_args(repo, label), "creating label")?;
        Ok(())
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn list_args(repo: &str, limit: usize) -> Vec<String> {
    let limit = limit.to_string();
    owned(&[
        "issue",
        "list",
        "--repo",
        repo,
        "--state",
        "open",
        "--json",
        ISSUE_LIST_FIELDS,
        "--limit",
        &limit,
    ])
}

pub(crate) fn view_args(repo: &str, number: u64) -> Vec<String> {
    let number = number.to_string();
    owned(&[
        "issue",
        "view",
        &number,
        "--repo",
        repo,
        "--json",
        ISSUE_VIEW_FIELDS,
    ])
}

pub(crate) fn change_args(repo: &str, change: &Change) -> Vec<String> {
    match change {
        Change::Create {
            title,
            labels,
            body,
        } => owned(&[
            "issue",
            "create",
            "--repo",
            repo,
            "--title",
            title,
            "--label",
            &labels.join(","),
            "--body",
            body,
        ]),
        Change::EditTitle { number, title } => edit_args(repo, *number, "--title", title),
        Change::EditBody { number, body } => edit_args(repo, *number, "--body", body),
        Change::AddLabel { number, label } => edit_args(repo, *number, "--add-label", label),
        Change::RemoveLabel { number, label } => {
            edit_args(repo, *number, "--remove-label", label)
        }
        Change::Close { number } => owned(&["issue", "close", &number.to_string(), "--repo", repo]),
        Change::Delete { number } => owned(&[
            "issue",
            "delete",
            &number.to_string(),
            "--repo",
            repo,
            "--yes",
        ]),
    }
}

fn edit_args(repo: &str, number: u64, flag: &str, value: &str) -> Vec<String> {
    owned(&["issue", "edit", &number.to_string(), "--repo", repo, flag, value])
}

pub(crate) fn label_list_args(repo: &str) -> Vec<String> {
    owned(&["label", "list", "--repo", repo, "--json", "name"])
}

pub(crate) fn label_create_args(repo: &str, label: &LabelSpec) -> Vec<String> {
    owned(&[
        "label",
        "create",
        label.name,
        "--repo",
        repo,
        "--color",
        label.color,
        "--description",
        label.description,
    ])
}

#[cfg(test)]
#[path = "gh_tests.rs"]
mod tests;
