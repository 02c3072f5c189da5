// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Launcher self-healing.
//!
//! When run as `ghtask`, make sure `gt` and the priority shortcuts
//! `gt0`..`gt3` exist next to the executable: relative symlinks on Unix,
//! `.bat` wrappers on Windows. Existing entries are never touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const MAIN_BINARY: &str = "ghtask";
const LAUNCHER: &str = "gt";
const PRIORITY_SHORTCUTS: [&str; 4] = ["gt0", "gt1", "gt2", "gt3"];

/// Heal launchers next to the running executable. Failures are logged.
pub fn heal() {
    let exe = match std::env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("cannot locate executable: {}", e);
            return;
        }
    };
    match heal_at(&exe) {
        Ok(created) if !created.is_empty() => {
            tracing::debug!(?created, "created shortcut launchers");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("failed to create shortcut launchers: {}", e),
    }
}

/// Create missing launchers for `exe` and return the paths created.
///
/// Does nothing unless `exe` is the main binary, so launchers never spawn
/// launchers of their own.
pub fn heal_at(exe: &Path) -> io::Result<Vec<PathBuf>> {
    let Some(file_name) = exe.file_name().and_then(|n| n.to_str()) else {
        return Ok(Vec::new());
    };
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if stem != MAIN_BINARY {
        return Ok(Vec::new());
    }
    let Some(dir) = exe.parent() else {
        return Ok(Vec::new());
    };

    let mut created = Vec::new();
    for name in std::iter::once(LAUNCHER).chain(PRIORITY_SHORTCUTS) {
        if let Some(path) = install(dir, file_name, name)? {
            created.push(path);
        }
    }
    Ok(created)
}

#[cfg(unix)]
fn install(dir: &Path, binary: &str, name: &str) -> io::Result<Option<PathBuf>> {
    let path = dir.join(name);
    if fs::symlink_metadata(&path).is_ok() {
        return Ok(None);
    }
    std::os::unix::fs::symlink(binary, &path)?;
    Ok(Some(path))
}

#[cfg(windows)]
fn install(dir: &Path, binary: &str, name: &str) -> io::Result<Option<PathBuf>> {
    let path = dir.join(format!("{name}.bat"));
    if path.exists() {
        return Ok(None);
    }
    fs::write(&path, batch_script(binary, name))?;
    Ok(Some(path))
}

#[cfg(not(any(unix, windows)))]
fn install(_dir: &Path, _binary: &str, _name: &str) -> io::Result<Option<PathBuf>> {
    Ok(None)
}

/// Body of a Windows launcher. `gt` forwards everything; the priority
/// shortcuts pass their own name as the first argument.
#[cfg_attr(not(windows), allow(dead_code))]
fn batch_script(binary: &str, name: &str) -> String {
    if name == LAUNCHER {
        format!("@echo off\r\n{binary} %*\r\n")
    } else {
        format!("@echo off\r\n{binary} {name} %*\r\n")
    }
}

#[cfg(test)]
#[path = "shortcuts_tests.rs"]
mod tests;
