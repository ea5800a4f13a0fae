//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding scenario files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write `content` to `name` inside the project
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// The `tw` binary with logging pinned to a known level
pub fn tw() -> Command {
    let mut cmd = Command::cargo_bin("tw").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Stdout of a successful invocation
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

pub const CASCADE: &str = r#"
[[trigger]]
class = "Relay"
name = "b"
kind = "immediate"
source = "A"
publish = "B"

[[trigger]]
class = "Relay"
name = "c"
kind = "delayed"
source = "A"
delay = 3
publish = "C"

[[trigger]]
class = "Relay"
name = "d"
kind = "joint"
sources = ["A", "B"]
publish = "D"

[[trigger]]
class = "Relay"
name = "e"
kind = "pattern"
pattern = ["A", "*", "D"]
publish = "E"

[run]
owner = "alice"
publish = ["A"]
"#;

pub const CYCLE: &str = r#"
[[trigger]]
class = "Loop"
name = "again"
kind = "immediate"
source = "A"
emit = ["A"]

[run]
publish = ["A"]
"#;
