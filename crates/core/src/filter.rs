// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Listing filters.
//!
//! Tokens come straight from the command line: `active`, or a two-character
//! priority token such as `p1`. Every recognized filter must match (AND);
//! unrecognized tokens are dropped and therefore match everything.

use crate::issue::{Issue, ACTIVE_LABEL};

/// A single label requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Issue must carry the `active` label.
    Active,
    /// Issue must carry this priority label (e.g. `P1`).
    Priority(String),
}

impl Filter {
    /// Parse a filter token, case-insensitively. Returns `None` for tokens
    /// that are not filters.
    pub fn parse(token: &str) -> Option<Self> {
        let lowered = token.to_lowercase();
        if lowered == ACTIVE_LABEL {
            return Some(Filter::Active);
        }
        if lowered.starts_with('p') && lowered.chars().count() == 2 {
            return Some(Filter::Priority(lowered.to_uppercase()));
        }
        None
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            Filter::Active => issue.is_active(),
            Filter::Priority(label) => issue.has_label(label),
        }
    }
}

/// A conjunction of filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FilterSet {
            filters: tokens
                .into_iter()
                .filter_map(|t| Filter::parse(t.as_ref()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        self.filters.iter().all(|f| f.matches(issue))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
