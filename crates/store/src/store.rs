// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record store: the single write path onto the chain

use crate::layout::ChainLayout;
use lc_core::{
    epoch_ms, ChainError, Delivery, LogLine, Payment, PaymentAck, PayloadParser, PostError,
    RetryPolicy, Topic,
};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Persists payment records and appends tape lines.
///
/// Cheap to clone; clones share the same advisory write lock. The store
/// assumes it is the only writer for its root (single-writer model); the
/// lock serializes posts within this process only.
#[derive(Clone)]
pub struct RecordStore {
    layout: ChainLayout,
    parser: Arc<dyn PayloadParser>,
    retry: RetryPolicy,
    write_lock: Arc<Mutex<()>>,
}

impl RecordStore {
    /// Open a store, creating the chain root if absent
    pub async fn open(
        layout: ChainLayout,
        parser: Arc<dyn PayloadParser>,
        retry: RetryPolicy,
    ) -> Result<Self, ChainError> {
        fs::create_dir_all(layout.root()).await?;
        Ok(Self {
            layout,
            parser,
            retry,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn layout(&self) -> &ChainLayout {
        &self.layout
    }

    pub fn parser(&self) -> &Arc<dyn PayloadParser> {
        &self.parser
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    /// Post a payment record to a topic.
    ///
    /// Performs three sequential mutations: record write, local tape
    /// append, global tape append. There is no atomicity across them — a
    /// crash mid-sequence can leave a record without a tape line or vice
    /// versa, and the caller must reconcile. A re-post of a payload whose
    /// hash already exists under the topic silently overwrites the record
    /// file and appends a fresh tape line.
    pub async fn post(&self, topic: &Topic, payment: Payment) -> Result<PaymentAck, PostError> {
        match self.post_inner(topic, &payment).await {
            Ok(()) => Ok(PaymentAck::new(payment)),
            Err(error) => Err(PostError::new(payment, error)),
        }
    }

    async fn post_inner(&self, topic: &Topic, payment: &Payment) -> Result<(), ChainError> {
        let raw = payment
            .transaction()
            .ok_or(ChainError::MissingTransaction)?;
        let parsed = self
            .parser
            .parse(raw)
            .await
            .map_err(|e| ChainError::InvalidTransaction(e.to_string()))?;
        let hash = parsed.hash;

        // Advisory: bounds the partial-failure window to one post at a time
        let _guard = self.write_lock.lock().await;

        let dir = self.layout.topic_dir(topic);
        fs::create_dir_all(&dir).await?;

        let json = serde_json::to_string(payment)?;
        fs::write(self.layout.record_path(topic, &hash), json).await?;

        let ts = epoch_ms();
        append_line(
            &self.layout.topic_tape(topic),
            &LogLine::local(&hash, ts),
        )
        .await?;
        append_line(
            &self.layout.global_tape(),
            &LogLine::redirect(topic.clone(), &hash, ts),
        )
        .await?;

        tracing::debug!(topic = %topic, hash = %hash, "posted record");
        Ok(())
    }

    /// Read a record file once, without retry
    pub async fn read_record(&self, topic: &Topic, hash: &str) -> Result<Payment, ChainError> {
        let path = self.layout.record_path(topic, hash);
        let json = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read a record, retrying while the file is not yet visible.
    ///
    /// Tape appends follow completed record writes, but a tailing reader
    /// can still observe the line before the record is readable. Retries
    /// are bounded by the store's policy; exhaustion is `RecordNotFound`.
    pub async fn load_record(&self, topic: &Topic, hash: &str) -> Result<Payment, ChainError> {
        for attempt in 1..=self.retry.max_attempts {
            match self.read_record(topic, hash).await {
                Ok(payment) => return Ok(payment),
                Err(ChainError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(
                        topic = %topic,
                        hash = %hash,
                        attempt,
                        "record not yet visible"
                    );
                    self.retry.backoff(attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
        Err(ChainError::RecordNotFound {
            topic: topic.to_string(),
            hash: hash.to_string(),
            attempts: self.retry.max_attempts,
        })
    }

    /// Load a record and run it through the payload parser
    pub async fn resolve(&self, topic: &Topic, hash: &str) -> Result<Delivery, ChainError> {
        let payment = self.load_record(topic, hash).await?;
        let raw = payment
            .transaction()
            .ok_or(ChainError::MissingTransaction)?;
        let parsed = self
            .parser
            .parse(raw)
            .await
            .map_err(|e| ChainError::InvalidTransaction(e.to_string()))?;
        Ok(Delivery {
            topic: topic.clone(),
            hash: hash.to_string(),
            payment,
            parsed,
        })
    }
}

/// Append one line to a tape, creating the file if needed
pub(crate) async fn append_line(path: &Path, line: &LogLine) -> Result<(), ChainError> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}\n", line.encode()).as_bytes())
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
