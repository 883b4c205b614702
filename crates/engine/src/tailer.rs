// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Following a growing tape file
//!
//! The tailer is poll-driven: each `poll` compares the file length to the
//! last read offset and reads whatever was appended since. A line is only
//! surfaced once its newline has landed; a trailing fragment is carried
//! across polls. If the file shrinks (rotation or truncation) the tailer
//! restarts from the top of the fresh file.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// Follows one tape file, yielding newly appended complete lines
#[derive(Debug)]
pub struct Tailer {
    path: PathBuf,
    offset: u64,
    partial: String,
}

impl Tailer {
    /// Tail from the file's current end: only lines appended after this
    /// call are surfaced. The file must exist.
    pub async fn start_at_end(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let offset = fs::metadata(&path).await?.len();
        Ok(Self {
            path,
            offset,
            partial: String::new(),
        })
    }

    /// Tail from the top of the file, surfacing existing content first
    pub fn from_start(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
            partial: String::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read lines appended since the previous poll
    pub async fn poll(&mut self) -> std::io::Result<Vec<String>> {
        let len = fs::metadata(&self.path).await?.len();

        if len < self.offset {
            tracing::debug!(path = %self.path.display(), "tape shrank; restarting from top");
            self.offset = 0;
            self.partial.clear();
        }
        if len == self.offset {
            return Ok(Vec::new());
        }

        let mut file = fs::File::open(&self.path).await?;
        file.seek(SeekFrom::Start(self.offset)).await?;
        let mut bytes = Vec::with_capacity((len - self.offset) as usize);
        file.take(len - self.offset).read_to_end(&mut bytes).await?;
        self.offset += bytes.len() as u64;

        self.partial.push_str(&String::from_utf8_lossy(&bytes));

        let mut lines = Vec::new();
        while let Some(newline) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=newline).collect();
            let line = line.trim_end_matches('\n');
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
#[path = "tailer_tests.rs"]
mod tests;
