// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue snapshots as returned by the tracker, and the label-derived
//! priority model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Label marking an issue as currently being worked on.
pub const ACTIVE_LABEL: &str = "active";

/// Label marking a newly created, untriaged issue.
pub const INBOX_LABEL: &str = "inbox";

/// Urgency tier carried by a `P0`..`P3` label. `P0` is the most urgent.
///
/// Variant order matches the lexical order of the label text, so sorting by
/// `Priority` and sorting by label name agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Critical.
    P0,
    /// Important.
    P1,
    /// Normal. Issues without a priority label fall here.
    #[default]
    P2,
    /// Low.
    P3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::P0, Priority::P1, Priority::P2, Priority::P3];

    /// Returns the label text for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }

    /// Derive a priority from a label list.
    ///
    /// The first recognized priority label in list order wins, even if a
    /// more urgent one follows it. No priority label means [`Priority::P2`].
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .find_map(|name| name.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    /// Parses the exact label text (`P0`..`P3`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "P0" => Ok(Priority::P0),
            "P1" => Ok(Priority::P1),
            "P2" => Ok(Priority::P2),
            "P3" => Ok(Priority::P3),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Label { name: name.into() }
    }
}

/// An open issue as listed by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// ISO-8601 timestamp; lexical order is chronological order.
    #[serde(default)]
    pub created_at: String,
}

impl Issue {
    /// Decode the JSON array produced by a tracker issue listing.
    pub fn parse_list(json: &str) -> Result<Vec<Issue>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn priority(&self) -> Priority {
        Priority::from_labels(self.labels.iter().map(|l| l.name.as_str()))
    }

    /// Case-insensitive label membership.
    pub fn has_label(&self, name: &str) -> bool {
        has_label(&self.labels, name)
    }

    pub fn is_active(&self) -> bool {
        self.has_label(ACTIVE_LABEL)
    }
}

/// A single issue including its body, as returned by the tracker's view call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDetail {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl IssueDetail {
    /// Decode the JSON object produced by a tracker issue view.
    pub fn parse(json: &str) -> Result<IssueDetail> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn priority(&self) -> Priority {
        Priority::from_labels(self.labels.iter().map(|l| l.name.as_str()))
    }
}

fn has_label(labels: &[Label], name: &str) -> bool {
    let wanted = name.to_lowercase();
    labels.iter().any(|l| l.name.to_lowercase() == wanted)
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
