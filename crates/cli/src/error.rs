// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitStatus;

use thiserror::Error;

/// All possible errors that can occur in ghtask.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    // Argument resolution
    #[error("issue number required\n  usage: gt {command} <issue-number>")]
    IssueNumberRequired { command: &'static str },

    #[error("invalid issue number: {value}\n  usage: gt {command} <issue-number>")]
    InvalidIssueNumber { command: &'static str, value: String },

    #[error("invalid field: {0} (must be 'body' or 'title')")]
    InvalidEditField(String),

    #[error("-e flag requires field argument (body or title)")]
    MissingEditField,

    #[error("-e flag required\n  usage: gt <issue-number> -e <body|title> [text]")]
    EditFlagRequired,

    #[error("issue title required\n  usage: {command} <title> [--body [text]]")]
    TitleRequired { command: &'static str },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    // Environment
    #[error("{reason}\n  hint: run inside a git repository with a GitHub remote, or set GT_REPO=owner/name")]
    RepoNotFound { reason: String },

    #[error("could not parse GitHub repo from: {0}")]
    UnrecognizedRemote(String),

    // Input
    #[error("no content provided via stdin")]
    EmptyInput,

    // Collaborators
    #[error("failed to launch editor '{editor}': {source}\n  hint: set EDITOR to an installed editor")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: ExitStatus },

    #[error("failed to run gh: {0}\n  hint: install the GitHub CLI and run 'gh auth login'")]
    TrackerUnavailable(#[source] std::io::Error),

    #[error("error {action}: gh exited with {status}\n{output}")]
    TrackerFailed {
        action: &'static str,
        status: ExitStatus,
        output: String,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] gt_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ghtask operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
