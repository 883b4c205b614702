// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The chain service: public surface over store and watchers

use crate::dispatch::Dispatcher;
use crate::registry::{WatcherHandle, WatcherRegistry};
use crate::subscription::Subscription;
use crate::tailer::Tailer;
use lc_core::{
    ChainConfig, ChainError, Delivery, Payment, PaymentAck, PayloadParser, PostError, Target,
    Topic,
};
use lc_store::{ChainLayout, PruneOptions, RecordStore};
use std::sync::Arc;
use tokio::fs;

/// A local chain rooted at one directory.
///
/// Owns the record store and the watcher registry. The process running
/// this instance is assumed to be the only writer under the root.
pub struct Localchain {
    config: ChainConfig,
    store: RecordStore,
    registry: WatcherRegistry,
}

impl Localchain {
    /// Open a chain, creating its root directory if absent
    pub async fn open(
        config: ChainConfig,
        parser: Arc<dyn PayloadParser>,
    ) -> Result<Self, ChainError> {
        let layout = ChainLayout::new(&config.root);
        let store = RecordStore::open(layout, parser, config.retry).await?;
        Ok(Self {
            config,
            store,
            registry: WatcherRegistry::new(),
        })
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Active watchers, one per distinct tape path
    pub fn watcher_count(&self) -> usize {
        self.registry.len()
    }

    /// Post a payment record to a topic
    pub async fn post(&self, topic: &str, payment: Payment) -> Result<PaymentAck, PostError> {
        let topic = match Topic::new(topic) {
            Ok(topic) => topic,
            Err(e) => return Err(PostError::new(payment, e)),
        };
        self.store.post(&topic, payment).await
    }

    /// Point lookup of one record
    pub async fn get(&self, topic: &str, hash: &str) -> Result<Delivery, ChainError> {
        if topic.is_empty() {
            return Err(ChainError::MissingParameters("topic"));
        }
        let topic = Topic::new(topic)?;
        self.store.get(&topic, hash).await
    }

    /// Last `size` records of a target's tape, in log order
    pub async fn tail(&self, target: &str, size: usize) -> Result<Vec<Delivery>, ChainError> {
        if target.is_empty() {
            return Err(ChainError::MissingParameters("path"));
        }
        let target: Target = target.parse()?;
        self.store.tail(&target, size).await
    }

    /// Reset a topic's tape, optionally archiving it
    pub async fn prune(&self, topic: &str, options: PruneOptions) -> Result<(), ChainError> {
        let topic = Topic::new(topic)?;
        self.store.prune(&topic, options).await
    }

    /// Subscribe to a topic's tape, or to every topic via `*`.
    ///
    /// Creates the topic directory and an empty tape if needed, so a
    /// subscription can precede the first post. Subscribing twice to the
    /// same resolved tape path reuses the existing watcher.
    pub async fn subscribe(&self, target: &str) -> Result<Subscription, ChainError> {
        let target: Target = target.parse()?;
        self.subscribe_target(&target).await
    }

    /// Typed variant of `subscribe`
    pub async fn subscribe_target(&self, target: &Target) -> Result<Subscription, ChainError> {
        let tape = self.store.layout().tape_path(target);
        if let Some(dir) = tape.parent() {
            fs::create_dir_all(dir).await?;
        }
        if !fs::try_exists(&tape).await? {
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&tape)
                .await?;
        }

        // Registry keys are canonical so `a/b` and `./a//b` share a watcher
        let key = fs::canonicalize(&tape).await?;
        if let Some(handle) = self.registry.lookup(&key) {
            tracing::debug!(watched = %target, "reusing watcher");
            return Ok(Subscription::new(target.clone(), handle.attach()));
        }

        let handle = WatcherHandle::new();
        let receiver = handle.attach();
        self.registry.insert(key.clone(), handle.clone());

        let tailer = Tailer::start_at_end(&key).await?;
        let dispatcher = Dispatcher::new(self.store.clone(), target.clone());
        let registry = self.registry.clone();
        let poll_interval = self.config.poll_interval;
        let watched = target.clone();

        tokio::spawn(async move {
            let mut tailer = tailer;
            loop {
                tokio::time::sleep(poll_interval).await;
                match tailer.poll().await {
                    Ok(lines) => {
                        for raw in lines {
                            if let Some(delivery) = dispatcher.dispatch(&raw).await {
                                handle.broadcast(delivery);
                            }
                        }
                    }
                    Err(e) => {
                        // Operator channel only; subscribers observe
                        // end-of-stream when the handle drops.
                        tracing::error!(watched = %watched, error = %e, "tape watch failed");
                        registry.remove(&key);
                        break;
                    }
                }
            }
        });

        tracing::debug!(watched = %target, "watcher started");
        Ok(Subscription::new(target.clone(), receiver))
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
