// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The listing pipeline: filter, order and render issues as terminal rows.

use crate::filter::FilterSet;
use crate::issue::{Issue, IssueDetail};
use crate::palette::{self, RESET};
use crate::width::{truncate, visible_width};

/// Width assumed when the terminal size cannot be detected.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;
/// Titles never get squeezed below this many columns.
pub const MIN_TITLE_WIDTH: usize = 40;
/// Columns reserved for the issue number in compact rows.
pub const NUMBER_RESERVE: usize = 7;
/// Left-aligned width of the number column in compact rows.
pub const NUMBER_WIDTH: usize = 5;
/// Zero-padded digits of the number in verbose rows.
pub const VERBOSE_DIGITS: usize = 3;

/// Notice printed instead of an empty list.
pub const NO_ISSUES: &str = "No issues found";

/// Terminal capabilities and display mode for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show zero-padded numbers and priority text, never truncate.
    pub verbose: bool,
    /// Standard output is an interactive terminal.
    pub interactive: bool,
    /// Detected terminal width, `None` when detection failed.
    pub width: Option<usize>,
    /// Emit color escape sequences.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            verbose: false,
            interactive: false,
            width: None,
            color: true,
        }
    }
}

impl RenderOptions {
    fn terminal_width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_TERMINAL_WIDTH)
    }

    /// Columns available to a compact-row title.
    pub fn title_width(&self) -> usize {
        self.terminal_width()
            .saturating_sub(NUMBER_RESERVE)
            .max(MIN_TITLE_WIDTH)
    }

    /// Pad rows so the background fills the line. Needs a real terminal of
    /// known width, and is pointless without a background color.
    fn pads_rows(&self) -> bool {
        self.color && self.interactive && self.width.is_some()
    }
}

/// Sort by priority, then creation time, both ascending. Stable, so issues
/// with equal keys keep the tracker's order.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

/// Filter then order a fetched collection.
pub fn select(mut issues: Vec<Issue>, filters: &FilterSet) -> Vec<Issue> {
    if !filters.is_empty() {
        issues.retain(|issue| filters.matches(issue));
    }
    sort_issues(&mut issues);
    issues
}

/// Render one row. `index` is the position in the displayed sequence and
/// selects the background stripe.
pub fn render_row(issue: &Issue, index: usize, opts: &RenderOptions) -> String {
    let priority = issue.priority();
    let active = issue.is_active();
    let fg = palette::fg(palette::foreground(priority, active));

    let content = if opts.verbose {
        let digits = format!("{:0width$}", issue.number, width = VERBOSE_DIGITS);
        let number = if opts.color && opts.interactive {
            mute_leading_zeros(&digits, &fg)
        } else {
            digits
        };
        format!("[{}-{}]   {}", number, priority, issue.title)
    } else {
        let title = truncate(&issue.title, opts.title_width());
        format!("{:<width$} {}", issue.number, title, width = NUMBER_WIDTH)
    };

    if !opts.color {
        return content;
    }

    let padding = if opts.pads_rows() {
        let visible = visible_width(&content);
        " ".repeat(opts.terminal_width().saturating_sub(visible))
    } else {
        String::new()
    };

    format!(
        "{}{}{}{}{}",
        palette::bg(palette::background(index, active)),
        fg,
        content,
        padding,
        RESET
    )
}

/// Run the whole pipeline and return the lines to print.
pub fn render(issues: Vec<Issue>, filters: &FilterSet, opts: &RenderOptions) -> Vec<String> {
    let selected = select(issues, filters);
    if selected.is_empty() {
        return vec![NO_ISSUES.to_string()];
    }
    selected
        .iter()
        .enumerate()
        .map(|(index, issue)| render_row(issue, index, opts))
        .collect()
}

/// Render a single issue: colored header, blank line, then the body.
pub fn render_detail(detail: &IssueDetail, color: bool) -> Vec<String> {
    let header = format!("#{} - {}", detail.number, detail.title);
    let mut lines = if color {
        let fg = palette::fg(palette::priority_color(detail.priority()));
        vec![format!("{}{}{}", fg, header, RESET)]
    } else {
        vec![header]
    };
    lines.push(String::new());
    if !detail.body.is_empty() {
        lines.push(detail.body.clone());
    }
    lines
}

fn mute_leading_zeros(digits: &str, restore: &str) -> String {
    let zeros = digits.len() - digits.trim_start_matches('0').len();
    if zeros == 0 || zeros == digits.len() {
        return digits.to_string();
    }
    format!(
        "{}{}{}{}",
        palette::fg(palette::muted()),
        &digits[..zeros],
        restore,
        &digits[zeros..]
    )
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
