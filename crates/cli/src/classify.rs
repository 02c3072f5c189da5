// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turn the program name and raw arguments into a command.
//!
//! Resolution order, first match wins:
//! 1. program invoked as `gt0`..`gt3`: create at that priority
//! 2. first argument is `gt0`..`gt3`: same, argument consumed
//! 3. no arguments: list
//! 4. first argument is a known verb: that verb, argument consumed
//! 5. first argument starts with `-`: list with every argument
//! 6. first argument is a number: view, or edit when `-e`/`--edit` follows
//! 7. anything else: create at the default priority, arguments are the title

use std::path::Path;

use gt_core::Priority;

/// The operation selected for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Create through a priority shortcut.
    Shortcut(Priority),
    /// Create from bare words at the default priority.
    CreateDefault,
    List,
    ListPriority(Priority),
    ListActive,
    Start,
    Pause,
    Done,
    Delete,
    Setup,
    Help,
    View,
    Edit,
}

impl Verb {
    /// Name shown in usage lines.
    pub fn name(&self) -> &'static str {
        match self {
            Verb::Shortcut(p) => shortcut_name(*p),
            Verb::CreateDefault => "gt",
            Verb::List => "list",
            Verb::ListPriority(Priority::P0) => "p0",
            Verb::ListPriority(Priority::P1) => "p1",
            Verb::ListPriority(Priority::P2) => "p2",
            Verb::ListPriority(Priority::P3) => "p3",
            Verb::ListActive => "active",
            Verb::Start => "start",
            Verb::Pause => "pause",
            Verb::Done => "done",
            Verb::Delete => "delete",
            Verb::Setup => "setup",
            Verb::Help => "help",
            Verb::View => "view",
            Verb::Edit => "edit",
        }
    }

    /// Priority a create verb assigns.
    pub fn create_priority(&self) -> Option<Priority> {
        match self {
            Verb::Shortcut(p) => Some(*p),
            Verb::CreateDefault => Some(Priority::default()),
            _ => None,
        }
    }
}

/// A resolved verb and the arguments left for its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: Verb,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(verb: Verb, args: &[String]) -> Self {
        Invocation {
            verb,
            args: args.to_vec(),
        }
    }
}

/// Base name of the executable with any extension removed.
pub fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Classify an invocation. Never fails: unrecognized input becomes a create.
pub fn classify(program: &str, args: &[String]) -> Invocation {
    if let Some(priority) = shortcut_priority(program) {
        return Invocation::new(Verb::Shortcut(priority), args);
    }

    let Some((first, rest)) = args.split_first() else {
        return Invocation::new(Verb::List, &[]);
    };

    if let Some(priority) = shortcut_priority(first) {
        return Invocation::new(Verb::Shortcut(priority), rest);
    }

    if let Some(verb) = known_verb(first) {
        return Invocation::new(verb, rest);
    }

    if first.starts_with('-') {
        return Invocation::new(Verb::List, args);
    }

    if first.parse::<u64>().is_ok() {
        let verb = if rest.iter().any(|a| is_edit_flag(a)) {
            Verb::Edit
        } else {
            Verb::View
        };
        return Invocation::new(verb, args);
    }

    Invocation::new(Verb::CreateDefault, args)
}

fn shortcut_name(priority: Priority) -> &'static str {
    match priority {
        Priority::P0 => "gt0",
        Priority::P1 => "gt1",
        Priority::P2 => "gt2",
        Priority::P3 => "gt3",
    }
}

fn shortcut_priority(name: &str) -> Option<Priority> {
    Priority::ALL
        .into_iter()
        .find(|p| shortcut_name(*p) == name)
}

fn known_verb(arg: &str) -> Option<Verb> {
    let verb = match arg {
        "list" => Verb::List,
        "p0" => Verb::ListPriority(Priority::P0),
        "p1" => Verb::ListPriority(Priority::P1),
        "p2" => Verb::ListPriority(Priority::P2),
        "p3" => Verb::ListPriority(Priority::P3),
        "active" => Verb::ListActive,
        "start" | "activate" => Verb::Start,
        "pause" | "stop" => Verb::Pause,
        "done" => Verb::Done,
        "rm" | "delete" => Verb::Delete,
        "setup" => Verb::Setup,
        "help" | "--help" | "-h" => Verb::Help,
        "view" => Verb::View,
        "edit" => Verb::Edit,
        _ => return None,
    };
    Some(verb)
}

pub(crate) fn is_edit_flag(arg: &str) -> bool {
    arg == "-e" || arg == "--edit"
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
