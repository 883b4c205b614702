// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tape rotation and archive retention
//!
//! Rotation is not synchronized against a live watcher on the same tape;
//! a watcher that observes the truncation restarts from the top of the
//! fresh file. Running prune concurrently with posts to the same topic
//! is outside the single-writer model.

use crate::store::RecordStore;
use lc_core::{epoch_ms, ChainError, Topic};
use std::path::PathBuf;
use tokio::fs;

/// Options for `prune`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneOptions {
    /// When set, rotate the live tape into a stamped archive and keep at
    /// most this many archives (the fresh one included). When unset,
    /// truncate the live tape in place.
    pub archive: Option<u32>,
}

impl PruneOptions {
    pub fn truncate() -> Self {
        Self { archive: None }
    }

    pub fn archive(retain: u32) -> Self {
        Self {
            archive: Some(retain),
        }
    }
}

impl RecordStore {
    /// Reset a topic's live tape, optionally archiving its contents.
    ///
    /// Record files are never touched; only tape history is dropped.
    /// Archive deletion failures propagate.
    pub async fn prune(&self, topic: &Topic, options: PruneOptions) -> Result<(), ChainError> {
        let tape = self.layout().topic_tape(topic);
        match options.archive {
            None => {
                fs::create_dir_all(self.layout().topic_dir(topic)).await?;
                fs::write(&tape, "").await?;
                tracing::info!(topic = %topic, "truncated tape");
            }
            Some(retain) => {
                self.trim_archives(topic, retain).await?;

                // Stamp with rotation time; bump if an archive from the
                // same millisecond already exists.
                let mut seq = epoch_ms();
                let mut archive = self.layout().archive_path(topic, seq);
                while fs::try_exists(&archive).await? {
                    seq += 1;
                    archive = self.layout().archive_path(topic, seq);
                }

                fs::rename(&tape, &archive).await?;
                fs::write(&tape, "").await?;
                tracing::info!(topic = %topic, archive = %archive.display(), "rotated tape");
            }
        }
        Ok(())
    }

    /// Delete all but the `retain - 1` newest archives, making room for
    /// the one about to be created.
    async fn trim_archives(&self, topic: &Topic, retain: u32) -> Result<(), ChainError> {
        let mut archives = self.list_archives(topic).await?;
        // newest first by embedded sequence
        archives.sort_by(|a, b| b.0.cmp(&a.0));

        let keep = retain.saturating_sub(1) as usize;
        for (seq, path) in archives.into_iter().skip(keep) {
            fs::remove_file(&path).await?;
            tracing::debug!(topic = %topic, seq, "deleted archive");
        }
        Ok(())
    }

    /// All archive files under a topic, unsorted
    pub async fn list_archives(&self, topic: &Topic) -> Result<Vec<(i64, PathBuf)>, ChainError> {
        let dir = self.layout().topic_dir(topic);
        let mut archives = Vec::new();
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(archives),
            Err(e) => return Err(e.into()),
        };
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if let Some(seq) = crate::layout::ChainLayout::archive_seq(&name.to_string_lossy()) {
                archives.push((seq, entry.path()));
            }
        }
        Ok(archives)
    }
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod tests;
