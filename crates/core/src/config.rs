// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain configuration

use crate::error::ChainError;
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a chain instance.
///
/// All fields have defaults; a config file only needs to name what it
/// overrides:
///
/// ```toml
/// root = "/var/lib/localchain"
/// poll_interval = "100ms"
///
/// [retry]
/// max_attempts = 10
/// delay = "500ms"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Directory holding the global tape and all topic directories
    pub root: PathBuf,
    /// How often tape watchers poll for growth
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// Retry policy applied to record loads
    pub retry: RetryPolicy,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("localchain"),
            poll_interval: Duration::from_millis(200),
            retry: RetryPolicy::default(),
        }
    }
}

impl ChainConfig {
    /// Config with defaults rooted at the given directory
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ChainError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
