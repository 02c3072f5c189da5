// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of issue text from piped input, inline arguments or an editor.
//!
//! Sources are tried in a fixed order:
//! 1. piped standard input (must be non-empty once trimmed)
//! 2. the inline value that followed the flag
//! 3. the editor, when the flag was given, seeded with the current text
//! 4. nothing: an empty string

use crate::console::Console;
use crate::editor::{edit_in_scratch, Editor};
use crate::error::{Error, Result};

/// Where resolved text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Piped,
    Inline,
    Editor,
    Empty,
}

/// Text produced for one field of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub text: String,
    pub source: ContentSource,
    /// What the editor was seeded with, when the editor was used.
    pub seed: Option<String>,
}

impl ResolvedContent {
    fn new(text: String, source: ContentSource) -> Self {
        ResolvedContent {
            text,
            source,
            seed: None,
        }
    }

    /// The user closed the editor without changing anything.
    pub fn is_unchanged(&self) -> bool {
        match (&self.source, &self.seed) {
            (ContentSource::Editor, Some(seed)) => seed.trim() == self.text.trim(),
            _ => false,
        }
    }
}

/// Picks the content source for create and edit.
pub struct ContentResolver<'a> {
    console: &'a dyn Console,
    editor: &'a dyn Editor,
}

impl<'a> ContentResolver<'a> {
    pub fn new(console: &'a dyn Console, editor: &'a dyn Editor) -> Self {
        ContentResolver { console, editor }
    }

    /// Which source `resolve` would use, without reading or launching anything.
    pub fn source(&self, has_flag: bool, inline: &str) -> ContentSource {
        if self.console.stdin_is_piped() {
            ContentSource::Piped
        } else if !inline.is_empty() {
            ContentSource::Inline
        } else if has_flag {
            ContentSource::Editor
        } else {
            ContentSource::Empty
        }
    }

    /// Resolve the text for `field`.
    ///
    /// `seed` is only called when the editor is opened, so callers can defer
    /// fetching the current value until it is needed.
    pub fn resolve<F>(
        &self,
        has_flag: bool,
        inline: &str,
        field: &str,
        seed: F,
    ) -> Result<ResolvedContent>
    where
        F: FnOnce() -> Result<String>,
    {
        match self.source(has_flag, inline) {
            ContentSource::Piped => {
                let raw = self.console.read_stdin()?;
                let text = raw.trim();
                if text.is_empty() {
                    return Err(Error::EmptyInput);
                }
                self.console
                    .notice(&format!("✓ Read {} bytes from stdin", text.len()));
                Ok(ResolvedContent::new(text.to_string(), ContentSource::Piped))
            }
            ContentSource::Inline => Ok(ResolvedContent::new(
                inline.to_string(),
                ContentSource::Inline,
            )),
            ContentSource::Editor => {
                let seed = seed()?;
                let text = edit_in_scratch(self.editor, &seed, field)?;
                Ok(ResolvedContent {
                    text,
                    source: ContentSource::Editor,
                    seed: Some(seed),
                })
            }
            ContentSource::Empty => Ok(ResolvedContent::new(String::new(), ContentSource::Empty)),
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
