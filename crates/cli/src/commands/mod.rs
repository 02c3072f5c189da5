// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers.
//!
//! Every handler takes a [`Session`] holding its collaborators and writes
//! user-facing output to the given writer, so tests can drive handlers with
//! fakes and inspect what they printed.

pub mod create;
pub mod edit;
pub mod lifecycle;
pub mod list;
pub mod setup;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod view;

use crate::config::Config;
use crate::console::Console;
use crate::content::ContentResolver;
use crate::editor::Editor;
use crate::error::Result;
use crate::repo::RepoLocator;
use crate::tracker::Tracker;

/// Collaborators available to a command.
pub struct Session<'a> {
    pub config: &'a Config,
    pub tracker: &'a dyn Tracker,
    pub editor: &'a dyn Editor,
    pub console: &'a dyn Console,
    pub locator: &'a dyn RepoLocator,
}

impl<'a> Session<'a> {
    /// The repository every tracker call targets.
    pub fn repo(&self) -> Result<String> {
        self.locator.locate()
    }

    pub fn resolver(&self) -> ContentResolver<'a> {
        ContentResolver::new(self.console, self.editor)
    }
}
