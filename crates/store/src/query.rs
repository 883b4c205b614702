// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point and windowed queries over a tape's history
//!
//! Independent of live subscription: queries read the persisted files
//! directly and terminate.

use crate::store::RecordStore;
use lc_core::{ChainError, Delivery, LogLine, Target, Topic};
use std::collections::VecDeque;
use std::io::ErrorKind;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};

impl RecordStore {
    /// Point lookup of one record under a topic.
    ///
    /// Applies the store's retry policy, so a `get` racing the write path
    /// behaves like a dispatching subscriber.
    pub async fn get(&self, topic: &Topic, hash: &str) -> Result<Delivery, ChainError> {
        if hash.is_empty() {
            return Err(ChainError::MissingParameters("hash"));
        }
        self.resolve(topic, hash).await
    }

    /// The last `size` entries of a target's tape, resolved to records,
    /// in original log order.
    ///
    /// Reads the tape start-to-end keeping a sliding window of the most
    /// recent `size` lines, then resolves the retained lines' records
    /// concurrently. A target whose tape does not exist yet has no
    /// entries. Malformed lines are skipped.
    pub async fn tail(&self, target: &Target, size: usize) -> Result<Vec<Delivery>, ChainError> {
        if size == 0 {
            return Err(ChainError::MissingParameters("size"));
        }

        let tape = self.layout().tape_path(target);
        let file = match fs::File::open(&tape).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut window: VecDeque<LogLine> = VecDeque::with_capacity(size + 1);
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match LogLine::decode(&line) {
                Ok(decoded) => {
                    window.push_back(decoded);
                    if window.len() > size {
                        window.pop_front();
                    }
                }
                Err(e) => {
                    tracing::warn!(tape = %tape.display(), error = %e, "skipping malformed tape line");
                }
            }
        }

        // Resolve concurrently, then join in window order so the result
        // follows the log, not resolution completion.
        let mut handles = Vec::with_capacity(window.len());
        for line in window {
            let Some((topic, hash)) = line.resolve(target) else {
                tracing::warn!(
                    tape = %tape.display(),
                    hash = line.hash(),
                    "local line in global tape has no topic; skipping"
                );
                continue;
            };
            let store = self.clone();
            let hash = hash.to_string();
            handles.push(tokio::spawn(
                async move { store.resolve(&topic, &hash).await },
            ));
        }

        let mut deliveries = Vec::with_capacity(handles.len());
        for handle in handles {
            let resolved = handle
                .await
                .map_err(|e| ChainError::Io(std::io::Error::other(e)))??;
            deliveries.push(resolved);
        }
        Ok(deliveries)
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
