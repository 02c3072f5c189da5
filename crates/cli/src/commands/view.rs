// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use gt_core::listing;

use super::Session;
use crate::error::Result;
use crate::flags::issue_number;

/// Show one issue: colored title line, then the body.
pub fn run(session: &Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let number = issue_number(args, "view")?;
    let repo = session.repo()?;
    let detail = session.tracker.view_issue(&repo, number)?;

    for line in listing::render_detail(&detail, session.config.color) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
