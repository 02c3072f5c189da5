// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Moving an issue through its lifecycle: active, paused, closed, deleted.

use std::io::Write;

use gt_core::ACTIVE_LABEL;

use super::Session;
use crate::error::Result;
use crate::flags::issue_number;
use crate::tracker::Change;

/// Add the `active` label.
pub fn start(session: &Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let number = issue_number(args, "start")?;
    let repo = session.repo()?;
    session.tracker.apply_change(
        &repo,
        &Change::AddLabel {
            number,
            label: ACTIVE_LABEL.to_string(),
        },
    )?;
    writeln!(out, "✓ Activated #{number}")?;
    Ok(())
}

/// Remove the `active` label, leaving the issue open.
pub fn pause(session: &Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let number = issue_number(args, "pause")?;
    let repo = session.repo()?;
    session.tracker.apply_change(
        &repo,
        &Change::RemoveLabel {
            number,
            label: ACTIVE_LABEL.to_string(),
        },
    )?;
    writeln!(out, "✓ Paused #{number}")?;
    Ok(())
}

/// Close the issue.
pub fn done(session: &Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let number = issue_number(args, "done")?;
    let repo = session.repo()?;
    // Read the title first; it is echoed in the confirmation.
    let title = session.tracker.view_issue(&repo, number)?.title;
    session.tracker.apply_change(&repo, &Change::Close { number })?;
    writeln!(out, "✓ Closed #{number}: {title}")?;
    Ok(())
}

/// Delete the issue permanently.
pub fn delete(session: &Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let number = issue_number(args, "delete")?;
    let repo = session.repo()?;
    let title = session.tracker.view_issue(&repo, number)?.title;
    session.tracker.apply_change(&repo, &Change::Delete { number })?;
    writeln!(out, "✓ Deleted #{number}: {title}")?;
    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
