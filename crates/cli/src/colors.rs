// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output. Whether to color at all is
//! decided by [`Config::help_color`](crate::config::Config::help_color).

use anstyle::{Ansi256Color, Style};

/// ANSI 256-color codes for help text.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and comments: medium grey
    pub const CONTEXT: u8 = 245;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    pub const RESET: &str = "\x1b[0m";
}

fn paint(code: u8, text: &str) -> String {
    let style = Style::new().fg_color(Some(Ansi256Color(code).into()));
    format!("{style}{text}{style:#}")
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, comments) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color a command line: words as literals, `<placeholders>` and
/// `[optional]` parts as context. Whitespace is kept as is.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;

    while let Some(start) = rest.find(['<', '[']) {
        let end = group_end(rest, start);
        push_literal(&mut result, &rest[..start]);
        result.push_str(&context(&rest[start..end]));
        rest = &rest[end..];
    }
    push_literal(&mut result, rest);
    result
}

/// End of the bracketed group opening at `start`, nesting included.
fn group_end(text: &str, start: usize) -> usize {
    let (open, close) = if text[start..].starts_with('<') {
        ('<', '>')
    } else {
        ('[', ']')
    };
    let mut depth = 0usize;
    for (i, c) in text[start..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return start + i + 1;
            }
        }
    }
    text.len()
}

/// Literal-color the text, leaving surrounding whitespace uncolored.
fn push_literal(out: &mut String, text: &str) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        out.push_str(text);
        return;
    }
    let lead = text.len() - text.trim_start().len();
    out.push_str(&text[..lead]);
    out.push_str(&literal(trimmed));
    out.push_str(&text[lead + trimmed.len()..]);
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut space_start = None;

    for (i, &b) in bytes.iter().enumerate() {
        if b == b' ' {
            space_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = space_start.take() {
            if i - start >= 2 {
                return Some(start);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
