// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration.
//!
//! Settings come from an optional TOML file and are overridden by the
//! environment:
//! - `repo`: `owner/name` to operate on instead of the git remote (`GT_REPO`)
//! - `editor`: editor command for bodies and titles (`EDITOR`, then `VISUAL`)
//! - `issue_limit`: maximum number of open issues fetched for listing
//!
//! Color is environment only: `NO_COLOR=1` turns it off everywhere, and
//! `COLOR=1` colors help even when standard output is not a terminal.
//!
//! The file lives at `$GT_CONFIG`, or `ghtask/config.toml` in the platform
//! config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env::{self, vars};
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "ghtask";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default cap on issues fetched per listing.
pub const DEFAULT_ISSUE_LIMIT: usize = 1000;

/// Contents of the config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    pub repo: Option<String>,
    pub editor: Option<String>,
    pub issue_limit: Option<usize>,
}

impl FileConfig {
    /// Load the file at `path`. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository override; when `None` the git remote decides.
    pub repo: Option<String>,
    /// Editor command; when `None` a fallback is searched on `PATH`.
    pub editor: Option<String>,
    pub issue_limit: usize,
    /// Color list and detail output.
    pub color: bool,
    /// Color help without a terminal.
    pub force_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repo: None,
            editor: None,
            issue_limit: DEFAULT_ISSUE_LIMIT,
            color: true,
            force_color: false,
        }
    }
}

impl Config {
    /// Load the config file and apply the process environment.
    pub fn load() -> Result<Self> {
        let file = match config_path(env::lookup) {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        Config::resolve(file, env::lookup)
    }

    /// Environment settings only, for commands that must not fail on a
    /// broken config file.
    pub fn from_env() -> Self {
        let (color, force_color) = color_settings(env::lookup);
        Config {
            color,
            force_color,
            ..Config::default()
        }
    }

    /// Merge file settings with environment values read through `lookup`.
    pub fn resolve<F>(file: FileConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let issue_limit = file.issue_limit.unwrap_or(DEFAULT_ISSUE_LIMIT);
        if issue_limit == 0 {
            return Err(Error::Config("issue_limit must be at least 1".to_string()));
        }

        let (color, force_color) = color_settings(&lookup);
        Ok(Config {
            repo: lookup(vars::GT_REPO).or(file.repo),
            editor: lookup(vars::EDITOR)
                .or_else(|| lookup(vars::VISUAL))
                .or(file.editor),
            issue_limit,
            color,
            force_color,
        })
    }

    /// Whether help is colored on a stdout that is or is not a terminal.
    pub fn help_color(&self, terminal: bool) -> bool {
        self.color && (self.force_color || terminal)
    }
}

/// `(color, force_color)` from `NO_COLOR` and `COLOR`.
fn color_settings<F>(lookup: F) -> (bool, bool)
where
    F: Fn(&str) -> Option<String>,
{
    let is_one = |name: &str| lookup(name).as_deref() == Some("1");
    (!is_one(vars::NO_COLOR), is_one(vars::COLOR))
}

/// Location of the config file, if one can be determined.
pub fn config_path<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(vars::GT_CONFIG).map(PathBuf::from).or_else(|| {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
