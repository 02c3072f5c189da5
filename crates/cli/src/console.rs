// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal capabilities and standard input.

use std::io::{self, IsTerminal};

/// What the process knows about its terminal.
pub trait Console {
    /// Standard output is an interactive terminal.
    fn stdout_is_terminal(&self) -> bool;

    /// Terminal width in columns, `None` when it cannot be detected.
    fn terminal_width(&self) -> Option<usize>;

    /// Standard input is a pipe or a redirected file.
    fn stdin_is_piped(&self) -> bool;

    /// Read standard input to the end.
    fn read_stdin(&self) -> io::Result<String>;

    /// Status line for the user, kept off standard output.
    fn notice(&self, message: &str);
}

/// The real process console.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConsole;

impl Console for SystemConsole {
    fn stdout_is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn terminal_width(&self) -> Option<usize> {
        if !self.stdout_is_terminal() {
            return None;
        }
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => Some(usize::from(cols)),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("terminal size unavailable: {}", e);
                None
            }
        }
    }

    fn stdin_is_piped(&self) -> bool {
        let stdin = io::stdin();
        !stdin.is_terminal() && stdin_is_data(&stdin)
    }

    fn read_stdin(&self) -> io::Result<String> {
        io::read_to_string(io::stdin())
    }

    fn notice(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Character devices such as `/dev/null` carry no content.
#[cfg(unix)]
fn stdin_is_data(stdin: &io::Stdin) -> bool {
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let metadata = stdin
        .as_fd()
        .try_clone_to_owned()
        .map(std::fs::File::from)
        .and_then(|file| file.metadata());
    match metadata {
        Ok(meta) => !meta.file_type().is_char_device(),
        Err(e) => {
            tracing::debug!("cannot inspect stdin: {}", e);
            false
        }
    }
}

#[cfg(not(unix))]
fn stdin_is_data(_stdin: &io::Stdin) -> bool {
    true
}
