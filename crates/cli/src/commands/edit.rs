// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::Session;
use crate::error::{Error, Result};
use crate::flags::{issue_number, take_edit, Field};
use crate::tracker::Change;

/// What an edit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated { field: Field, number: u64 },
    /// The editor was closed without changes; nothing was sent.
    Unchanged,
}

/// Replace an issue's title or body, then report the outcome.
pub fn run(session: &Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    match run_impl(session, args)? {
        EditOutcome::Updated { field, number } => {
            writeln!(out, "Updated {field} for issue #{number}")?;
        }
        EditOutcome::Unchanged => writeln!(out, "No changes made")?,
    }
    Ok(())
}

/// Internal implementation that returns the outcome for testing.
pub(crate) fn run_impl(session: &Session, args: &[String]) -> Result<EditOutcome> {
    let edit = take_edit(args)?;
    let field = edit.field.ok_or(Error::EditFlagRequired)?;
    let number = issue_number(&edit.positional, "edit")?;
    let repo = session.repo()?;

    // The current value is only fetched when the editor needs a seed.
    let content = session
        .resolver()
        .resolve(true, &edit.inline, field.as_str(), || {
            let detail = session.tracker.view_issue(&repo, number)?;
            Ok(match field {
                Field::Body => detail.body,
                Field::Title => detail.title,
            })
        })?;

    if content.is_unchanged() {
        return Ok(EditOutcome::Unchanged);
    }

    let change = match field {
        Field::Title if content.text.trim().is_empty() => {
            return Err(Error::FieldEmpty { field: "title" });
        }
        Field::Title => Change::EditTitle {
            number,
            title: content.text,
        },
        Field::Body => Change::EditBody {
            number,
            body: content.text,
        },
    };
    session.tracker.apply_change(&repo, &change)?;
    Ok(EditOutcome::Updated { field, number })
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
