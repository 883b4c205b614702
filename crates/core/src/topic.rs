// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical topic paths and subscription targets

use crate::error::ChainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The wildcard accepted by subscribe/tail to address the global tape
pub const WILDCARD: &str = "*";

/// A validated hierarchical topic path, e.g. `payments/us/west`.
///
/// Maps 1:1 to a directory under the chain root. Segments must be
/// non-empty and must not traverse out of the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    pub fn new(path: impl Into<String>) -> Result<Self, ChainError> {
        let path = path.into();
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Err(ChainError::MissingTopic);
        }
        for segment in trimmed.split('/') {
            if segment.is_empty() {
                return Err(Self::invalid(&path, "empty path segment"));
            }
            if segment == "." || segment == ".." {
                return Err(Self::invalid(&path, "relative path segment"));
            }
            if segment
                .chars()
                .any(|c| c == '*' || c == '\\' || c == '\0' || c.is_whitespace())
            {
                return Err(Self::invalid(&path, "segment contains a reserved character"));
            }
        }
        Ok(Self(trimmed.to_string()))
    }

    fn invalid(topic: &str, reason: &str) -> ChainError {
        ChainError::InvalidTopic {
            topic: topic.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory for this topic under the chain root
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Topic {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Topic {
    type Error = ChainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

/// Where a subscription or tail query is pointed: one topic's tape, or
/// the global tape at the chain root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The root tape aggregating every topic (`*`)
    Global,
    /// A single topic's own tape
    Topic(Topic),
}

impl Target {
    /// Directory whose tape this target follows
    pub fn dir(&self, root: &Path) -> PathBuf {
        match self {
            Target::Global => root.to_path_buf(),
            Target::Topic(topic) => topic.dir(root),
        }
    }

    pub fn topic(&self) -> Option<&Topic> {
        match self {
            Target::Global => None,
            Target::Topic(topic) => Some(topic),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Global => write!(f, "{}", WILDCARD),
            Target::Topic(topic) => write!(f, "{}", topic),
        }
    }
}

impl FromStr for Target {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == WILDCARD {
            Ok(Target::Global)
        } else {
            Ok(Target::Topic(Topic::new(s)?))
        }
    }
}

impl From<Topic> for Target {
    fn from(topic: Topic) -> Self {
        Target::Topic(topic)
    }
}

#[cfg(test)]
#[path = "topic_tests.rs"]
mod tests;
