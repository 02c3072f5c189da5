// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The remote issue tracker.
//!
//! Commands talk to the tracker through [`Tracker`] so they can be tested
//! against an in-memory fake. [`GhCli`] is the real implementation, driving
//! the GitHub CLI.

mod gh;

pub use gh::GhCli;

use gt_core::{Issue, IssueDetail};

use crate::error::Result;

/// A mutation of remote state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Create {
        title: String,
        labels: Vec<String>,
        body: String,
    },
    EditTitle {
        number: u64,
        title: String,
    },
    EditBody {
        number: u64,
        body: String,
    },
    AddLabel {
        number: u64,
        label: String,
    },
    RemoveLabel {
        number: u64,
        label: String,
    },
    Close {
        number: u64,
    },
    Delete {
        number: u64,
    },
}

impl Change {
    /// What the change is doing, for error messages.
    pub fn action(&self) -> &'static str {
        match self {
            Change::Create { .. } => "creating issue",
            Change::EditTitle { .. } | Change::EditBody { .. } => "updating issue",
            Change::AddLabel { .. } => "adding label",
            Change::RemoveLabel { .. } => "removing label",
            Change::Close { .. } => "closing issue",
            Change::Delete { .. } => "deleting issue",
        }
    }
}

/// A label definition for `setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    pub name: &'static str,
    /// Hex color without the leading `#`.
    pub color: &'static str,
    pub description: &'static str,
}

/// Operations the commands need from the remote tracker.
pub trait Tracker {
    /// Open issues, at most `limit` of them.
    fn list_open_issues(&self, repo: &str, limit: usize) -> Result<Vec<Issue>>;

    fn view_issue(&self, repo: &str, number: u64) -> Result<IssueDetail>;

    /// Apply a change and return the tracker's trimmed output. For creates
    /// this is the new issue's URL.
    fn apply_change(&self, repo: &str, change: &Change) -> Result<String>;

    /// Names of the labels defined on the repository.
    fn list_labels(&self, repo: &str) -> Result<Vec<String>>;

    fn create_label(&self, repo: &str, label: &LabelSpec) -> Result<()>;
}
