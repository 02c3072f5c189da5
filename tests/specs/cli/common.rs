// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Stdio};

use assert_cmd::assert::{Assert, OutputAssertExt};
pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const REPO: &str = "owner/tasks";
pub const CREATED_URL: &str = "https://github.com/owner/tasks/issues/101";

/// Stand-in for `gh`: logs each call as `|`-separated arguments and answers
/// from canned files in its directory.
const FAKE_GH: &str = r#"#!/bin/sh
dir=$(dirname "$0")
for arg in "$@"; do printf '%s|' "$arg"; done >> "$dir/calls.log"
echo >> "$dir/calls.log"
case "$1 $2" in
  "issue list") cat "$dir/issues.json" ;;
  "issue view") cat "$dir/view-$3.json" ;;
  "issue create") echo "https://github.com/owner/tasks/issues/101" ;;
  "label list") cat "$dir/labels.json" ;;
  "label create") [ ! -e "$dir/reject-$3" ] || { echo "label rejected" >&2; exit 1; } ;;
  *) ;;
esac
"#;

/// A scratch directory holding a fake `gh` and a fake editor.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        write_executable(&dir.path().join("gh"), FAKE_GH);
        fs::write(dir.path().join("issues.json"), "[]").unwrap();
        fs::write(dir.path().join("labels.json"), "[]").unwrap();
        let fixture = Fixture { dir };
        fixture.set_editor_text(None);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// JSON returned by `gh issue list`.
    pub fn with_issues(self, json: &str) -> Self {
        fs::write(self.path().join("issues.json"), json).unwrap();
        self
    }

    /// JSON returned by `gh issue view <number>`.
    pub fn with_view(self, number: u64, json: &str) -> Self {
        fs::write(self.path().join(format!("view-{number}.json")), json).unwrap();
        self
    }

    /// JSON returned by `gh label list`.
    pub fn with_labels(self, json: &str) -> Self {
        fs::write(self.path().join("labels.json"), json).unwrap();
        self
    }

    /// Make `gh label create <name>` fail.
    pub fn rejecting_label(self, name: &str) -> Self {
        fs::write(self.path().join(format!("reject-{name}")), "").unwrap();
        self
    }

    /// The fake editor saves `text`, or leaves the file alone when `None`.
    pub fn with_editor_text(self, text: Option<&str>) -> Self {
        self.set_editor_text(text);
        self
    }

    fn set_editor_text(&self, text: Option<&str>) {
        let script = match text {
            Some(text) => format!("#!/bin/sh\nprintf '%s' '{text}' > \"$1\"\n"),
            None => "#!/bin/sh\nexit 0\n".to_string(),
        };
        write_executable(&self.path().join("editor"), &script);
    }

    /// `ghtask` with the fake `gh` first on `PATH` and a clean environment.
    pub fn gt(&self) -> Gt {
        self.command(Path::new(env!("CARGO_BIN_EXE_ghtask")))
    }

    /// Run the binary under another name, as an installed shortcut would.
    pub fn gt_as(&self, name: &str) -> Gt {
        let link = self.path().join(name);
        if !link.exists() {
            std::os::unix::fs::symlink(env!("CARGO_BIN_EXE_ghtask"), &link).unwrap();
        }
        self.command(&link)
    }

    fn command(&self, program: &Path) -> Gt {
        let path = std::env::var("PATH").unwrap_or_default();
        let mut cmd = Command::new(program);
        cmd.env("PATH", format!("{}:{}", self.path().display(), path))
            .env("GT_REPO", REPO)
            .env("GT_CONFIG", self.path().join("config.toml"))
            .env("EDITOR", self.path().join("editor"))
            .env("NO_COLOR", "1")
            .env_remove("VISUAL")
            .env_remove("COLOR")
            .env_remove("GT_LOG")
            .current_dir(self.path());
        Gt { cmd, stdin: None }
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.path().join("config.toml"), toml).unwrap();
    }

    /// Every `gh` call so far, one argument list per call.
    pub fn calls(&self) -> Vec<Vec<String>> {
        let log = fs::read_to_string(self.path().join("calls.log")).unwrap_or_default();
        log.lines()
            .map(|line| {
                line.strip_suffix('|').unwrap_or(line)
                    .split('|')
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    /// Calls whose first two arguments are `group` and `action`.
    pub fn calls_to(&self, group: &str, action: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.len() >= 2 && c[0] == group && c[1] == action)
            .collect()
    }
}

/// A pending `ghtask` run.
///
/// Standard input is `/dev/null` unless [`Gt::write_stdin`] supplies content,
/// so the binary only sees piped input when a test asks for it.
pub struct Gt {
    cmd: Command,
    stdin: Option<Vec<u8>>,
}

impl Gt {
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: impl AsRef<OsStr>, val: impl AsRef<OsStr>) -> Self {
        self.cmd.env(key, val);
        self
    }

    pub fn env_remove(mut self, key: impl AsRef<OsStr>) -> Self {
        self.cmd.env_remove(key);
        self
    }

    /// Pipe `input` to the binary's standard input.
    pub fn write_stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Run to completion and get an assert handle.
    pub fn assert(mut self) -> Assert {
        self.cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        let output = match self.stdin {
            None => self.cmd.stdin(Stdio::null()).output().unwrap(),
            Some(input) => {
                let mut child = self.cmd.stdin(Stdio::piped()).spawn().unwrap();
                let mut pipe = child.stdin.take().unwrap();
                let writer = std::thread::spawn(move || pipe.write_all(&input));
                let output = child.wait_with_output().unwrap();
                // The binary may exit without draining the pipe.
                let _ = writer.join().unwrap();
                output
            }
        };
        output.assert()
    }
}

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// An issue as `gh issue list --json` returns it.
pub fn issue_json(number: u64, title: &str, labels: &[&str], created_at: &str) -> String {
    let labels = labels
        .iter()
        .map(|l| format!(r#"{{"name":"{l}"}}"#))
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"number":{number},"title":"{title}","labels":[{labels}],"createdAt":"{created_at}"}}"#)
}

/// An issue as `gh issue view --json` returns it.
pub fn view_json(number: u64, title: &str, body: &str, labels: &[&str]) -> String {
    let labels = labels
        .iter()
        .map(|l| format!(r#"{{"name":"{l}"}}"#))
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"number":{number},"title":"{title}","body":"{body}","labels":[{labels}]}}"#)
}
