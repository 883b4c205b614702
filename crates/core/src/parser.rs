// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payload parser trait and implementations
//!
//! Parsing the transaction payload is an external capability as far as
//! the log is concerned: the store only asks for a canonical hash plus a
//! structural decomposition and never inspects payload internals itself.
//! Parsers must be pure; they get no access to the log or the store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors from payload parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Canonical hash plus structural decomposition of one payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    /// Canonical identifying hash of the payload
    pub hash: String,
    /// Parser-defined decomposition of the payload structure
    pub fields: serde_json::Value,
}

/// The external parsing capability
#[async_trait]
pub trait PayloadParser: Send + Sync + 'static {
    /// Derive the canonical hash and decomposition for a raw payload
    async fn parse(&self, raw: &str) -> Result<ParsedTransaction, ParseError>;
}

/// Default parser: treats the payload as a hex-encoded transaction and
/// derives the conventional txid (double SHA-256, byte-reversed hex).
#[derive(Debug, Clone, Copy, Default)]
pub struct TxidParser;

#[async_trait]
impl PayloadParser for TxidParser {
    async fn parse(&self, raw: &str) -> Result<ParsedTransaction, ParseError> {
        let bytes = hex_decode(raw)?;
        if bytes.is_empty() {
            return Err(ParseError::InvalidPayload("empty transaction".to_string()));
        }

        let first = Sha256::digest(&bytes);
        let mut second: Vec<u8> = Sha256::digest(first).to_vec();
        // txid convention: display the digest little-endian
        second.reverse();

        Ok(ParsedTransaction {
            hash: hex_encode(&second),
            fields: serde_json::json!({ "size": bytes.len() }),
        })
    }
}

/// Scriptable parser for tests.
///
/// Unmapped payloads get a deterministic derived hash so most tests need
/// no setup; specific payloads can be pinned to known hashes, and the
/// whole parser can be put into rejection mode.
#[derive(Debug, Clone, Default)]
pub struct FakeParser {
    state: Arc<Mutex<FakeParserState>>,
}

#[derive(Debug, Default)]
struct FakeParserState {
    hashes: HashMap<String, String>,
    reject: bool,
    calls: u32,
}

impl FakeParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a payload to a fixed hash
    pub fn map(&self, raw: impl Into<String>, hash: impl Into<String>) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.hashes.insert(raw.into(), hash.into());
    }

    /// Make every parse fail with `InvalidPayload`
    pub fn reject_all(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.reject = true;
    }

    /// How many times `parse` has been called
    pub fn call_count(&self) -> u32 {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls
    }

    fn derived_hash(raw: &str) -> String {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        raw.hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

#[async_trait]
impl PayloadParser for FakeParser {
    async fn parse(&self, raw: &str) -> Result<ParsedTransaction, ParseError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls += 1;
        if state.reject {
            return Err(ParseError::InvalidPayload("rejected by fake".to_string()));
        }
        let hash = state
            .hashes
            .get(raw)
            .cloned()
            .unwrap_or_else(|| Self::derived_hash(raw));
        Ok(ParsedTransaction {
            hash,
            fields: serde_json::json!({ "size": raw.len() }),
        })
    }
}

// Hex encoding helper
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hex_decode(raw: &str) -> Result<Vec<u8>, ParseError> {
    if raw.is_empty() || raw.len() % 2 != 0 {
        return Err(ParseError::InvalidPayload(
            "transaction hex has odd length".to_string(),
        ));
    }
    (0..raw.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&raw[i..i + 2], 16).map_err(|_| {
                ParseError::InvalidPayload("transaction is not valid hex".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
