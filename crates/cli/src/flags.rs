// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flag extraction for command handlers.
//!
//! The argument grammar is too loose for a declarative parser: flag values
//! swallow every token that follows them, and positional arguments may sit
//! on either side of a flag.

use std::fmt;
use std::str::FromStr;

use crate::classify::is_edit_flag;
use crate::error::{Error, Result};

fn is_verbose_flag(arg: &str) -> bool {
    arg == "-v" || arg == "--verbose"
}

fn is_body_flag(arg: &str) -> bool {
    arg == "--body" || arg == "-b"
}

/// Remove every `-v`/`--verbose`, keeping the rest in order.
pub fn take_verbose(args: &[String]) -> (bool, Vec<String>) {
    let mut verbose = false;
    let mut rest = Vec::with_capacity(args.len());
    for arg in args {
        if is_verbose_flag(arg) {
            verbose = true;
        } else {
            rest.push(arg.clone());
        }
    }
    (verbose, rest)
}

/// Result of scanning for `--body`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyFlag {
    pub present: bool,
    /// Tokens after the flag joined by single spaces.
    pub inline: String,
    /// Tokens before the flag.
    pub positional: Vec<String>,
}

/// Split arguments around the first `--body`/`-b`.
pub fn take_body(args: &[String]) -> BodyFlag {
    match args.iter().position(|a| is_body_flag(a)) {
        Some(at) => BodyFlag {
            present: true,
            inline: args[at + 1..].join(" "),
            positional: args[..at].to_vec(),
        },
        None => BodyFlag {
            present: false,
            inline: String::new(),
            positional: args.to_vec(),
        },
    }
}

/// An editable issue field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Body,
    Title,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Body => "body",
            Field::Title => "title",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "body" => Ok(Field::Body),
            "title" => Ok(Field::Title),
            other => Err(Error::InvalidEditField(other.to_string())),
        }
    }
}

/// Result of scanning for `-e`/`--edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFlag {
    /// `None` when no edit flag was given.
    pub field: Option<Field>,
    /// Tokens after the field joined by single spaces.
    pub inline: String,
    /// Tokens before the flag.
    pub positional: Vec<String>,
}

/// Split arguments around the first `-e`/`--edit <field>`.
pub fn take_edit(args: &[String]) -> Result<EditFlag> {
    let Some(at) = args.iter().position(|a| is_edit_flag(a)) else {
        return Ok(EditFlag {
            positional: args.to_vec(),
            ..EditFlag::default()
        });
    };

    let field = args
        .get(at + 1)
        .ok_or(Error::MissingEditField)?
        .parse::<Field>()?;

    Ok(EditFlag {
        field: Some(field),
        inline: args[at + 2..].join(" "),
        positional: args[..at].to_vec(),
    })
}

/// Parse the first positional argument as an issue number.
pub fn issue_number(args: &[String], command: &'static str) -> Result<u64> {
    let first = args.first().ok_or(Error::IssueNumberRequired { command })?;
    first.parse::<u64>().map_err(|_| Error::InvalidIssueNumber {
        command,
        value: first.clone(),
    })
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
