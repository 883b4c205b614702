// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tape line grammar
//!
//! Every tape line is space-delimited and newline-terminated:
//!
//! ```text
//! LOCALCHAIN <hash> <epoch-ms>              local entry
//! LOCALCHAIN /<topic> <hash> <epoch-ms>     global-redirect entry
//! ```
//!
//! Lines are decoded into a tagged variant once at the log boundary; the
//! rest of the system never branches on raw string shape.

use crate::topic::{Target, Topic};
use thiserror::Error;

/// Leading token of every tape line
pub const LINE_TOKEN: &str = "LOCALCHAIN";

/// File name of a live tape within its directory
pub const TAPE_FILE: &str = "tape.txt";

/// Errors from decoding a tape line
#[derive(Debug, Error)]
pub enum LineError {
    #[error("line does not start with {LINE_TOKEN}")]
    BadToken,
    #[error("wrong field count: {0}")]
    BadShape(usize),
    #[error("bad timestamp: {0}")]
    BadTimestamp(String),
    #[error("bad redirect topic: {0}")]
    BadTopic(String),
}

/// One decoded tape line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    /// Entry in a topic's own tape
    Local { hash: String, timestamp_ms: i64 },
    /// Entry in the root tape, qualified with the originating topic
    Redirect {
        topic: Topic,
        hash: String,
        timestamp_ms: i64,
    },
}

impl LogLine {
    pub fn local(hash: impl Into<String>, timestamp_ms: i64) -> Self {
        LogLine::Local {
            hash: hash.into(),
            timestamp_ms,
        }
    }

    pub fn redirect(topic: Topic, hash: impl Into<String>, timestamp_ms: i64) -> Self {
        LogLine::Redirect {
            topic,
            hash: hash.into(),
            timestamp_ms,
        }
    }

    /// Decode one tape line (without its trailing newline)
    pub fn decode(line: &str) -> Result<Self, LineError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => Err(LineError::BadShape(0)),
            [token, ..] if *token != LINE_TOKEN => Err(LineError::BadToken),
            [_, hash, ts] if !hash.starts_with('/') => Ok(LogLine::Local {
                hash: (*hash).to_string(),
                timestamp_ms: parse_ts(ts)?,
            }),
            [_, topic, hash, ts] if topic.starts_with('/') => {
                let topic = Topic::new(&topic[1..])
                    .map_err(|_| LineError::BadTopic((*topic).to_string()))?;
                Ok(LogLine::Redirect {
                    topic,
                    hash: (*hash).to_string(),
                    timestamp_ms: parse_ts(ts)?,
                })
            }
            fields => Err(LineError::BadShape(fields.len())),
        }
    }

    /// Encode as a tape line, without the trailing newline
    pub fn encode(&self) -> String {
        match self {
            LogLine::Local { hash, timestamp_ms } => {
                format!("{} {} {}", LINE_TOKEN, hash, timestamp_ms)
            }
            LogLine::Redirect {
                topic,
                hash,
                timestamp_ms,
            } => format!("{} /{} {} {}", LINE_TOKEN, topic, hash, timestamp_ms),
        }
    }

    /// Resolve the effective topic and record hash for a line read from
    /// `target`'s tape.
    ///
    /// Redirect lines carry their own topic; local lines inherit the
    /// topic the tape is bound to. A local-shaped line in the global tape
    /// has no resolvable topic and yields `None`.
    pub fn resolve(&self, target: &Target) -> Option<(Topic, &str)> {
        match self {
            LogLine::Redirect { topic, hash, .. } => Some((topic.clone(), hash)),
            LogLine::Local { hash, .. } => {
                target.topic().map(|topic| (topic.clone(), hash.as_str()))
            }
        }
    }

    pub fn hash(&self) -> &str {
        match self {
            LogLine::Local { hash, .. } | LogLine::Redirect { hash, .. } => hash,
        }
    }

    pub fn timestamp_ms(&self) -> i64 {
        match self {
            LogLine::Local { timestamp_ms, .. } | LogLine::Redirect { timestamp_ms, .. } => {
                *timestamp_ms
            }
        }
    }
}

fn parse_ts(field: &str) -> Result<i64, LineError> {
    field
        .parse()
        .map_err(|_| LineError::BadTimestamp(field.to_string()))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
