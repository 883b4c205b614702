// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The unit handed to subscribers and returned by queries

use crate::parser::ParsedTransaction;
use crate::payment::Payment;
use crate::topic::Topic;
use serde::{Deserialize, Serialize};

/// A record resolved from a tape line: where it lives, what was stored,
/// and the parser's view of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Effective topic the record was posted under
    pub topic: Topic,
    /// Canonical record hash
    pub hash: String,
    /// The persisted payment record
    pub payment: Payment,
    /// Parser decomposition of the transaction payload
    pub parsed: ParsedTransaction,
}
