// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use gt_core::{Priority, INBOX_LABEL};

use super::Session;
use crate::error::{Error, Result};
use crate::flags::take_body;
use crate::tracker::Change;

/// Create an issue titled by the positional words, labeled `inbox` and
/// `priority`. The body comes from piped input, `--body <text>`, or the
/// editor when `--body` is given alone.
pub fn run(
    session: &Session,
    priority: Priority,
    command: &'static str,
    args: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let body_flag = take_body(args);
    let title = body_flag.positional.join(" ");
    if title.trim().is_empty() {
        return Err(Error::TitleRequired { command });
    }

    let repo = session.repo()?;
    let body = session
        .resolver()
        .resolve(body_flag.present, &body_flag.inline, "body", || {
            Ok(String::new())
        })?;

    let change = Change::Create {
        title,
        labels: vec![INBOX_LABEL.to_string(), priority.as_str().to_string()],
        body: body.text,
    };
    let url = session.tracker.apply_change(&repo, &change)?;
    tracing::debug!(%priority, source = ?body.source, "issue created");

    writeln!(out, "Created: {url}")?;
    Ok(())
}

#[cfg(test)]
#[path = "create_tests.rs"]
mod tests;
