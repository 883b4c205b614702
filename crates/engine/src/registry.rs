// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watcher registry and per-watcher fan-out
//!
//! One watcher task exists per canonical tape path; the registry is
//! owned by the chain instance, not process-global. Subscribers attach
//! to an existing watcher's handle and receive every delivery it
//! broadcasts.

use lc_core::Delivery;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// Sender half of one subscriber's delivery channel
pub type DeliverySender = mpsc::UnboundedSender<Delivery>;
/// Receiver half of one subscriber's delivery channel
pub type DeliveryReceiver = mpsc::UnboundedReceiver<Delivery>;

/// Fan-out point for one watched tape path
#[derive(Clone, Default)]
pub struct WatcherHandle {
    senders: Arc<RwLock<Vec<DeliverySender>>>,
}

impl WatcherHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber; returns its receiving end
    pub fn attach(&self) -> DeliveryReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut senders = self.senders.write().unwrap_or_else(|e| e.into_inner());
        senders.push(tx);
        rx
    }

    /// Deliver to every live subscriber, dropping closed channels
    pub fn broadcast(&self, delivery: Delivery) {
        let mut senders = self.senders.write().unwrap_or_else(|e| e.into_inner());
        senders.retain(|tx| tx.send(delivery.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

/// Watchers keyed by canonical tape path
#[derive(Clone, Default)]
pub struct WatcherRegistry {
    watchers: Arc<RwLock<HashMap<PathBuf, WatcherHandle>>>,
}

impl WatcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, path: &Path) -> Option<WatcherHandle> {
        self.watchers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
    }

    pub fn insert(&self, path: PathBuf, handle: WatcherHandle) {
        let mut watchers = self.watchers.write().unwrap_or_else(|e| e.into_inner());
        watchers.insert(path, handle);
    }

    /// Drop a watcher's entry, e.g. after its tape became unreadable.
    /// A later subscribe to the same path creates a fresh watcher.
    pub fn remove(&self, path: &Path) -> Option<WatcherHandle> {
        let mut watchers = self.watchers.write().unwrap_or_else(|e| e.into_inner());
        watchers.remove(path)
    }

    pub fn len(&self) -> usize {
        self.watchers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
