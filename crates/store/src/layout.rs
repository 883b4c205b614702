// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping from topics, records, and archives to filesystem paths

use lc_core::{Target, Topic, TAPE_FILE};
use std::path::{Path, PathBuf};

const ARCHIVE_PREFIX: &str = "tape-";
const ARCHIVE_SUFFIX: &str = ".txt";

/// Path layout of one chain root
#[derive(Debug, Clone)]
pub struct ChainLayout {
    root: PathBuf,
}

impl ChainLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a topic's records and tape
    pub fn topic_dir(&self, topic: &Topic) -> PathBuf {
        topic.dir(&self.root)
    }

    /// A topic's live tape
    pub fn topic_tape(&self, topic: &Topic) -> PathBuf {
        self.topic_dir(topic).join(TAPE_FILE)
    }

    /// The root tape aggregating every topic
    pub fn global_tape(&self) -> PathBuf {
        self.root.join(TAPE_FILE)
    }

    /// Live tape for a subscription/query target
    pub fn tape_path(&self, target: &Target) -> PathBuf {
        target.dir(&self.root).join(TAPE_FILE)
    }

    /// Record file for a hash within a topic
    pub fn record_path(&self, topic: &Topic, hash: &str) -> PathBuf {
        self.topic_dir(topic).join(hash)
    }

    /// Frozen archive of a topic's former tape, stamped with `seq`
    pub fn archive_path(&self, topic: &Topic, seq: i64) -> PathBuf {
        self.topic_dir(topic)
            .join(format!("{}{}{}", ARCHIVE_PREFIX, seq, ARCHIVE_SUFFIX))
    }

    /// Embedded sequence number of an archive file name, if it is one
    pub fn archive_seq(file_name: &str) -> Option<i64> {
        file_name
            .strip_prefix(ARCHIVE_PREFIX)?
            .strip_suffix(ARCHIVE_SUFFIX)?
            .parse()
            .ok()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
