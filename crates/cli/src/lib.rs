// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ghtask - GitHub Issues as a priority task list.
//!
//! This crate provides the `ghtask` CLI (also installed as `gt` and the
//! priority shortcuts `gt0`..`gt3`). GitHub is the only store: priority,
//! lifecycle and intake are all labels, and every command maps to one or two
//! `gh` invocations.
//!
//! # Main Components
//!
//! - [`classify`] - picks the command from program name and arguments
//! - [`content`] - resolves issue text from a pipe, arguments or an editor
//! - [`tracker`] - the [`Tracker`](tracker::Tracker) trait and its `gh` implementation
//! - [`Config`] - settings from the config file and environment
//! - [`Error`] - Error types for all operations
//!
//! Listing, ordering and row rendering live in `gt-core`.

pub mod classify;
pub mod colors;
mod commands;
pub mod config;
pub mod console;
pub mod content;
pub mod editor;
pub mod env;
pub mod error;
pub mod flags;
pub mod help;
pub mod repo;
pub mod shortcuts;
pub mod tracker;

pub use classify::{classify, program_name, Invocation, Verb};
pub use commands::Session;
pub use config::Config;
pub use error::{Error, Result};

use std::io::{self, Write};

use crate::console::SystemConsole;
use crate::editor::SystemEditor;
use crate::repo::GitRemote;
use crate::tracker::GhCli;

/// Execute one invocation with the real collaborators. This is the main
/// entry point for the binary.
pub fn run(argv0: &str, args: &[String]) -> Result<()> {
    let invocation = classify(&program_name(argv0), args);
    tracing::debug!(verb = invocation.verb.name(), args = ?invocation.args, "classified");

    // Help must work even when the config file is broken.
    let config = if invocation.verb == Verb::Help {
        Config::from_env()
    } else {
        Config::load()?
    };

    let tracker = GhCli::default();
    let editor = SystemEditor::new(config.editor.clone());
    let console = SystemConsole;
    let locator = GitRemote::new(config.repo.clone());
    let session = Session {
        config: &config,
        tracker: &tracker,
        editor: &editor,
        console: &console,
        locator: &locator,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&session, &invocation, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Route an invocation to its command handler.
pub fn dispatch(session: &Session, invocation: &Invocation, out: &mut dyn Write) -> Result<()> {
    let args = invocation.args.as_slice();
    match invocation.verb {
        verb @ (Verb::Shortcut(_) | Verb::CreateDefault) => {
            let priority = verb.create_priority().unwrap_or_default();
            commands::create::run(session, priority, verb.name(), args, out)
        }
        Verb::List => commands::list::run(session, &[], args, out),
        Verb::ListPriority(priority) => {
            commands::list::run(session, &[priority.as_str()], args, out)
        }
        Verb::ListActive => commands::list::run(session, &[gt_core::ACTIVE_LABEL], args, out),
        Verb::Start => commands::lifecycle::start(session, args, out),
        Verb::Pause => commands::lifecycle::pause(session, args, out),
        Verb::Done => commands::lifecycle::done(session, args, out),
        Verb::Delete => commands::lifecycle::delete(session, args, out),
        Verb::Setup => commands::setup::run(session, out),
        Verb::View => commands::view::run(session, args, out),
        Verb::Edit => commands::edit::run(session, args, out),
        Verb::Help => {
            let color = session
                .config
                .help_color(session.console.stdout_is_terminal());
            out.write_all(help::render(color).as_bytes())?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
