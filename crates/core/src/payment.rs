// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payment record and acknowledgement types (BIP270 shape)

use serde::{Deserialize, Serialize};

/// A payment record as persisted under its content hash.
///
/// Only `transaction` is semantically required; it stays optional in the
/// wire shape so a missing payload surfaces as `MissingTransaction` at
/// post time rather than as a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Hex-formatted, fully-signed transaction. Required for posting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,
    /// Opaque merchant data. Optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_data: Option<String>,
    /// Paymail to send a refund to. Optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_to: Option<String>,
    /// Free-form memo. Optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl Payment {
    /// Build a payment carrying only a transaction payload
    pub fn from_transaction(tx: impl Into<String>) -> Self {
        Self {
            transaction: Some(tx.into()),
            merchant_data: None,
            refund_to: None,
            memo: None,
        }
    }

    /// The transaction payload, if present and non-empty
    pub fn transaction(&self) -> Option<&str> {
        self.transaction.as_deref().filter(|t| !t.is_empty())
    }
}

/// Acknowledgement returned by a successful post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAck {
    /// The payment that was persisted
    pub payment: Payment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl PaymentAck {
    pub fn new(payment: Payment) -> Self {
        Self {
            payment,
            memo: None,
        }
    }
}

#[cfg(test)]
#[path = "payment_tests.rs"]
mod tests;
