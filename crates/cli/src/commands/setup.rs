// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use gt_core::{ACTIVE_LABEL, INBOX_LABEL};

use super::Session;
use crate::error::Result;
use crate::tracker::LabelSpec;

/// Labels the workflow depends on.
pub const REQUIRED_LABELS: [LabelSpec; 6] = [
    LabelSpec {
        name: INBOX_LABEL,
        color: "d4c5f9",
        description: "Newly created tasks",
    },
    LabelSpec {
        name: ACTIVE_LABEL,
        color: "0e8a16",
        description: "Currently working on",
    },
    LabelSpec {
        name: "P0",
        color: "d93f0b",
        description: "Critical priority",
    },
    LabelSpec {
        name: "P1",
        color: "ff9800",
        description: "Important priority",
    },
    LabelSpec {
        name: "P2",
        color: "ffeb3b",
        description: "Normal priority",
    },
    LabelSpec {
        name: "P3",
        color: "cccccc",
        description: "Low priority",
    },
];

/// Create any required label the repository lacks. A failed label does not
/// stop the others.
pub fn run(session: &Session, out: &mut dyn Write) -> Result<()> {
    let repo = session.repo()?;
    writeln!(out, "Setting up labels for {repo}...")?;

    // Without the existing list every label is attempted.
    let existing = session.tracker.list_labels(&repo).unwrap_or_else(|e| {
        tracing::warn!("could not list labels: {}", e);
        Vec::new()
    });

    let mut created = 0;
    let mut skipped = 0;
    for label in &REQUIRED_LABELS {
        if existing.iter().any(|name| name.eq_ignore_ascii_case(label.name)) {
            writeln!(out, "  ✓ {} (already exists)", label.name)?;
            skipped += 1;
            continue;
        }
        match session.tracker.create_label(&repo, label) {
            Ok(()) => {
                writeln!(out, "  ✓ {} (created)", label.name)?;
                created += 1;
            }
            Err(e) => {
                tracing::warn!(label = label.name, "label creation failed: {}", e);
                writeln!(out, "  ✗ {} (failed)", label.name)?;
            }
        }
    }

    writeln!(out, "\nSetup complete: {created} created, {skipped} already existed")?;
    Ok(())
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
