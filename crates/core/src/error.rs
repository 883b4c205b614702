// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy shared across the workspace

use crate::payment::Payment;
use thiserror::Error;

/// Errors raised by chain operations
#[derive(Debug, Error)]
pub enum ChainError {
    /// A payment was posted without a transaction payload
    #[error("payment must include a transaction payload")]
    MissingTransaction,

    /// The payload parser rejected the transaction
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// A required call parameter was absent or empty
    #[error("missing required parameter: {0}")]
    MissingParameters(&'static str),

    /// No topic was given where one is required
    #[error("a topic must be given")]
    MissingTopic,

    /// The topic path failed validation
    #[error("invalid topic {topic:?}: {reason}")]
    InvalidTopic { topic: String, reason: String },

    /// A record referenced by a log line never became readable
    #[error("record {hash} not found under {topic} after {attempts} attempts")]
    RecordNotFound {
        topic: String,
        hash: String,
        attempts: u32,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// A failed post, carrying the payment that was being posted.
///
/// `post` performs three filesystem mutations with no atomicity across
/// them; on failure the caller gets the original payment back for
/// reconciliation, mirroring the ack it would have received on success.
#[derive(Debug, Error)]
#[error("post failed: {error}")]
pub struct PostError {
    pub payment: Payment,
    #[source]
    pub error: ChainError,
}

impl PostError {
    pub fn new(payment: Payment, error: ChainError) -> Self {
        Self { payment, error }
    }
}
