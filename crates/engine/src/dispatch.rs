// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolving tape lines into deliveries
//!
//! Dispatch never fails the watcher: a line that cannot be decoded,
//! resolved, or loaded is logged to the operator channel and skipped, so
//! one bad line cannot stall delivery of the lines behind it.

use lc_core::{Delivery, LogLine, Target};
use lc_store::RecordStore;

/// Turns raw tape lines from one target into deliveries
#[derive(Clone)]
pub struct Dispatcher {
    store: RecordStore,
    target: Target,
}

impl Dispatcher {
    pub fn new(store: RecordStore, target: Target) -> Self {
        Self { store, target }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Decode, resolve, and load one line; `None` means skipped
    pub async fn dispatch(&self, raw: &str) -> Option<Delivery> {
        let line = match LogLine::decode(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(watched = %self.target, line = raw, error = %e, "skipping malformed tape line");
                return None;
            }
        };

        let Some((topic, hash)) = line.resolve(&self.target) else {
            tracing::warn!(
                watched = %self.target,
                hash = line.hash(),
                "local line in global tape has no topic; skipping"
            );
            return None;
        };

        match self.store.resolve(&topic, hash).await {
            Ok(delivery) => Some(delivery),
            Err(e) => {
                tracing::error!(topic = %topic, hash = %hash, error = %e, "failed to resolve tape line");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
