// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use lc_core::Delivery;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one delivery in the selected format
pub fn print_delivery(delivery: &Delivery, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let memo = delivery.payment.memo.as_deref().unwrap_or("-");
            println!("{}  {}  {}", delivery.topic, delivery.hash, memo);
        }
        OutputFormat::Json => print_json(delivery)?,
    }
    Ok(())
}
