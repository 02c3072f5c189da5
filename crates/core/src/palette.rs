// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row colors for issue listings.
//!
//! Foreground encodes priority. Background stripes alternate between two
//! dark tones; active issues get a light background with dark text instead.

use anstyle::{Ansi256Color, Color, RgbColor};

use crate::issue::Priority;

/// Colors used by list and detail rendering.
pub mod codes {
    use anstyle::RgbColor;

    /// P0 foreground: strong red (#d70000)
    pub const P0: RgbColor = RgbColor(215, 0, 0);
    /// P1 foreground: orange
    pub const P1: u8 = 208;
    /// P2 foreground: light grey
    pub const P2: u8 = 250;
    /// P3 foreground: dim grey (#585858)
    pub const P3: RgbColor = RgbColor(88, 88, 88);

    /// Foreground on the active highlight: black
    pub const ACTIVE_FG: u8 = 0;
    /// Active highlight background: light grey
    pub const ACTIVE_BG: u8 = 250;
    /// Even row stripe (#121212)
    pub const STRIPE_EVEN: RgbColor = RgbColor(18, 18, 18);
    /// Odd row stripe (#080808)
    pub const STRIPE_ODD: RgbColor = RgbColor(8, 8, 8);
    /// Leading zeros of padded issue numbers
    pub const MUTED: u8 = 235;
}

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";

/// Foreground color for a priority level.
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::P0 => Color::Rgb(codes::P0),
        Priority::P1 => Color::Ansi256(Ansi256Color(codes::P1)),
        Priority::P2 => Color::Ansi256(Ansi256Color(codes::P2)),
        Priority::P3 => Color::Rgb(codes::P3),
    }
}

/// Foreground for a list row. Active rows override priority so the text
/// stays readable on the light highlight.
pub fn foreground(priority: Priority, active: bool) -> Color {
    if active {
        Color::Ansi256(Ansi256Color(codes::ACTIVE_FG))
    } else {
        priority_color(priority)
    }
}

/// Background for the row at `index` of the displayed sequence.
pub fn background(index: usize, active: bool) -> Color {
    if active {
        return Color::Ansi256(Ansi256Color(codes::ACTIVE_BG));
    }
    let stripe: RgbColor = if index % 2 == 0 {
        codes::STRIPE_EVEN
    } else {
        codes::STRIPE_ODD
    };
    Color::Rgb(stripe)
}

/// Color for insignificant leading zeros.
pub fn muted() -> Color {
    Color::Ansi256(Ansi256Color(codes::MUTED))
}

/// Escape sequence selecting `color` as the foreground.
pub fn fg(color: Color) -> String {
    color.render_fg().to_string()
}

/// Escape sequence selecting `color` as the background.
pub fn bg(color: Color) -> String {
    color.render_bg().to_string()
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
