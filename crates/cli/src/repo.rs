// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository detection from an override or the `origin` git remote.

use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

// `user@host:owner/repo`
static SCP_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[^@/\s]+@[^:/\s]+:(?P<path>[^/\s]+/[^/\s]+?)(?:\.git)?/?$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
// `https://host/owner/repo`, `ssh://user@host/owner/repo`
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^[a-zA-Z][a-zA-Z0-9+.-]*://(?:[^@/\s]+@)?[^/\s]+/(?P<path>[^/\s]+/[^/\s]+?)(?:\.git)?/?$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Finds the `owner/name` repository to operate on.
pub trait RepoLocator {
    fn locate(&self) -> Result<String>;
}

/// Uses the configured repository, else asks git for the `origin` URL.
#[derive(Debug, Clone, Default)]
pub struct GitRemote {
    configured: Option<String>,
}

impl GitRemote {
    pub fn new(configured: Option<String>) -> Self {
        GitRemote { configured }
    }
}

impl RepoLocator for GitRemote {
    fn locate(&self) -> Result<String> {
        if let Some(repo) = &self.configured {
            return Ok(repo.clone());
        }

        let output = Command::new("git")
            .args(["remote", "get-url", "origin"])
            .output()
            .map_err(|e| Error::RepoNotFound {
                reason: format!("failed to run git: {e}"),
            })?;
        if !output.status.success() {
            return Err(Error::RepoNotFound {
                reason: "not in a git repository or no origin remote".to_string(),
            });
        }

        let url = String::from_utf8_lossy(&output.stdout);
        let repo = parse_remote_url(url.trim())?;
        tracing::debug!(%repo, "repository from origin remote");
        Ok(repo)
    }
}

/// Extract `owner/name` from a remote URL, dropping a trailing `.git`.
pub fn parse_remote_url(url: &str) -> Result<String> {
    SCP_RE
        .captures(url)
        .or_else(|| URL_RE.captures(url))
        .and_then(|caps| caps.name("path"))
        .map(|path| path.as_str().to_string())
        .ok_or_else(|| Error::UnrecognizedRemote(url.to_string()))
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
