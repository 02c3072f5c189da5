// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;

const HELP: &str = "\
gt - GitHub Tasks

USAGE:
  gt [-v]                       List all open issues
  gt <number>                   View issue details
  gt <number> -e <field> [text] Edit issue (field: body or title)
  gt <title>                    Create P2 (normal) issue (default)
  gt p0/p1/p2/p3 [-v]           Filter by priority
  gt active [-v]                Show only active tasks
  gt start <number>             Mark issue as active (alias: activate)
  gt pause <number>             Remove active label (alias: stop)
  gt done <number>              Close issue
  gt rm <number>                Delete issue (permanent, alias: delete)
  gt setup                      Create required labels in repo

  gt0 <title> [--body [text]]   Create P0 (critical) issue
  gt1 <title> [--body [text]]   Create P1 (important) issue
  gt2 <title> [--body [text]]   Create P2 (normal) issue
  gt3 <title> [--body [text]]   Create P3 (low) issue

FLAGS:
  -v, --verbose                 Show priority labels in output
  -b, --body [text]             Add issue body (inline, editor, or piped)
  -e, --edit <field> [text]     Edit issue field (inline, editor, or piped)

EXAMPLES:
  gt setup                              # Setup labels for this repo
  gt                                    # List all tasks (colors only)
  gt -v                                 # List all tasks (with priority text)
  gt 123                                # View issue #123

  # Creating issues
  gt refactor legacy code               # Create default P2 task (no body)
  gt1 fix auth bug --body               # Create P1 task, open $EDITOR for body
  gt1 \"task title\" --body \"body text\"   # Create P1 task with inline body
  cat template.md | gt1 \"title\" --body  # Create P1 task with piped body

  # Editing issues
  gt 123 -e body                        # Edit issue #123 body in $EDITOR
  gt 123 -e title \"New title\"           # Update title with inline text
  echo \"New body\" | gt 123 -e body      # Update body from stdin

  # Workflow
  gt p1 -v                              # List P1 tasks with priority labels
  gt start 234                          # Mark #234 as active
  gt pause 234                          # Remove active (keep open)
  gt done 567                           # Close #567
  gt rm 890                             # Delete #890 (permanent)

ENVIRONMENT:
  GT_REPO                       Repository as owner/name (skips git detection)
  GT_CONFIG                     Config file path
  GT_LOG                        Log filter, e.g. debug
  EDITOR, VISUAL                Editor for --body and -e
  NO_COLOR=1                    Disable colors

SETUP:
  1. Run: gh auth login
  2. Navigate to a git repo with GitHub remote
  3. Run: gt setup (creates all required labels)
";

/// The full help text, colored when `color` is set.
pub fn render(color: bool) -> String {
    if !color {
        return HELP.to_string();
    }
    let mut out = String::with_capacity(HELP.len() * 2);
    for line in HELP.lines() {
        out.push_str(&colorize_line(line));
        out.push('\n');
    }
    out
}

fn colorize_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return line.to_string();
    }
    let indent = &line[..line.len() - trimmed.len()];

    // Section header: "USAGE:"
    if indent.is_empty() && trimmed.ends_with(':') {
        return colors::header(trimmed);
    }
    // Comment-only line: "# Creating issues"
    if trimmed.starts_with('#') {
        return format!("{indent}{}", colors::context(trimmed));
    }
    // Example: "gt 123    # View issue"
    if let Some(gap) = trimmed.find("  #") {
        let cmd = trimmed[..gap].trim_end();
        let rest = &trimmed[cmd.len()..];
        let comment = rest.trim_start();
        return format!(
            "{indent}{}{}{}",
            colors::literal(cmd),
            &rest[..rest.len() - comment.len()],
            colors::context(comment)
        );
    }
    // Usage: "gt start <number>    Mark issue as active"
    if let Some(end) = colors::find_description_start(trimmed) {
        let (cmd, desc) = trimmed.split_at(end);
        return format!("{indent}{}{desc}", colors::colorize_command(cmd));
    }
    line.to_string()
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
