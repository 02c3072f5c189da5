// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive editing through an external editor.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Editors tried in order when none is configured.
const FALLBACK_EDITORS: [&str; 3] = ["vim", "nano", "vi"];

/// Something that lets the user edit a file in place.
pub trait Editor {
    /// Open `path` and block until the user is done.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// Launches an editor command with the terminal attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemEditor {
    /// `None` searches for a fallback when the editor is first needed.
    command: Option<String>,
}

impl SystemEditor {
    pub fn new(command: Option<String>) -> Self {
        SystemEditor { command }
    }

    /// The command that will be run.
    pub fn command(&self) -> String {
        self.command.clone().unwrap_or_else(default_editor)
    }
}

impl Editor for SystemEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        let command = self.command();
        // Commands like `code --wait` carry their own arguments.
        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(Error::EditorLaunch {
                editor: command.clone(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty editor command"),
            });
        };

        tracing::debug!(editor = %command, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|source| Error::EditorLaunch {
                editor: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::EditorFailed {
                editor: command,
                status,
            });
        }
        Ok(())
    }
}

/// Platform fallback when neither `EDITOR`, `VISUAL` nor the config names one.
pub fn default_editor() -> String {
    if cfg!(windows) {
        return "notepad.exe".to_string();
    }
    FALLBACK_EDITORS
        .iter()
        .find(|name| which::which(name).is_ok())
        .unwrap_or(&"vi")
        .to_string()
}

/// Seed a scratch file, let the user edit it, and return the trimmed result.
///
/// The scratch file is named `ghtask-<field>-*.md` and removed on return,
/// whether or not the editor succeeded.
pub fn edit_in_scratch(editor: &dyn Editor, seed: &str, field: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix(&format!("ghtask-{field}-"))
        .suffix(".md")
        .tempfile()?;
    file.write_all(seed.as_bytes())?;
    file.flush()?;

    // Close our handle so editors that lock files can open it.
    let path = file.into_temp_path();
    editor.edit(&path)?;

    let content = fs::read_to_string(&path)?;
    Ok(content.trim().to_string())
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
