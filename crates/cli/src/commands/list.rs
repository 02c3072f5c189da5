// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use gt_core::listing;
use gt_core::{FilterSet, RenderOptions};

use super::Session;
use crate::error::Result;
use crate::flags::take_verbose;

/// List open issues. `preset` holds filter tokens implied by the verb
/// (`p1`, `active`) and is combined with any given as arguments.
pub fn run(session: &Session, preset: &[&str], args: &[String], out: &mut dyn Write) -> Result<()> {
    let (verbose, rest) = take_verbose(args);
    let filters = FilterSet::from_tokens(
        preset
            .iter()
            .map(|token| token.to_string())
            .chain(rest),
    );

    let repo = session.repo()?;
    let issues = session
        .tracker
        .list_open_issues(&repo, session.config.issue_limit)?;
    tracing::debug!(count = issues.len(), filters = filters.filters().len(), "fetched issues");

    let opts = RenderOptions {
        verbose,
        interactive: session.console.stdout_is_terminal(),
        width: session.console.terminal_width(),
        color: session.config.color,
    };
    for line in listing::render(issues, &filters, &opts) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
