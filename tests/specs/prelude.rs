//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub use predicates::prelude::*;

/// A throwaway chain root plus helpers to run `lc` against it
pub struct Chain {
    root: TempDir,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// An `lc` invocation pointed at this chain root
    pub fn lc(&self) -> Command {
        let mut cmd = Command::cargo_bin("lc").unwrap();
        cmd.arg("--root").arg(self.root.path());
        cmd
    }

    /// Like `lc`, but with a config that fails fast on missing records
    pub fn lc_fast(&self) -> Command {
        let config = self.root.path().join("lc.toml");
        if !config.exists() {
            std::fs::write(&config, "[retry]\nmax_attempts = 1\ndelay = \"10ms\"\n").unwrap();
        }
        let mut cmd = Command::cargo_bin("lc").unwrap();
        cmd.arg("--config").arg(&config);
        cmd.arg("--root").arg(self.root.path());
        cmd
    }

    /// Post one transaction payload with an optional memo
    pub fn post(&self, topic: &str, tx: &str, memo: Option<&str>) {
        let mut cmd = self.lc();
        cmd.args(["post", topic, "--transaction", tx]);
        if let Some(memo) = memo {
            cmd.args(["--memo", memo]);
        }
        cmd.assert().success();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.root.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.root.path().join(rel).exists()
    }

    /// Hash recorded on a tape line (second field, or third for a
    /// global-redirect line)
    pub fn hash_on_line(line: &str) -> String {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields[0], "LOCALCHAIN");
        if fields.len() == 4 {
            fields[2].to_string()
        } else {
            fields[1].to_string()
        }
    }

    /// First hash appended to a topic's tape
    pub fn first_hash(&self, topic: &str) -> String {
        let tape = self.read(&format!("{}/tape.txt", topic));
        Self::hash_on_line(tape.lines().next().unwrap())
    }
}
