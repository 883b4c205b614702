// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded retry policy for record loads
//!
//! A tape line can become visible to a reader before the record file it
//! references is readable. Readers retry the load on a fixed backoff, but
//! the retry is bounded: exhaustion fails with `RecordNotFound` instead
//! of polling forever.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total load attempts, including the first
    pub max_attempts: u32,
    /// Fixed delay between attempts
    #[serde(with = "humantime_serde")]
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Single attempt, no backoff. Keeps tests fast.
    pub fn immediate() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Sleep between attempts; `attempt` counts from 1
    pub async fn backoff(&self, attempt: u32) {
        if attempt < self.max_attempts && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
