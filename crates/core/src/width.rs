// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display-width helpers that understand embedded ANSI escape sequences.

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

/// Marker appended to a truncated title.
pub const CONTINUATION: char = '>';

const ESC: char = '\x1b';

/// Number of terminal columns `s` occupies.
///
/// Escape sequences run from `ESC` up to and including the first ASCII
/// letter and take no columns. Wide characters count by display width.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == ESC {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}

/// Shorten `title` to fit in `max` columns.
///
/// A title that fits is returned untouched. Otherwise the title is cut to
/// `max - 1` columns and [`CONTINUATION`] is appended.
pub fn truncate(title: &str, max: usize) -> Cow<'_, str> {
    if visible_width(title) <= max {
        return Cow::Borrowed(title);
    }
    if max == 0 {
        return Cow::Owned(String::new());
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::with_capacity(title.len().min(max * 4));
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(CONTINUATION);
    Cow::Owned(out)
}

/// Remove escape sequences, leaving only visible text.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        if c == ESC {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "width_tests.rs"]
mod tests;
