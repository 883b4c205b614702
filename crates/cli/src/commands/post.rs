// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lc post <topic>` - Post a payment record

use crate::output::{print_json, OutputFormat};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use lc_core::Payment;
use lc_engine::Localchain;
use std::path::PathBuf;

#[derive(Args)]
pub struct PostArgs {
    /// Topic to post under
    pub topic: String,

    /// Hex-formatted transaction payload
    #[arg(long, short = 't', conflicts_with = "file")]
    pub transaction: Option<String>,

    /// Read the full payment record from a JSON file (`-` for stdin)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Merchant data to attach
    #[arg(long)]
    pub merchant_data: Option<String>,

    /// Paymail to send a refund to
    #[arg(long)]
    pub refund_to: Option<String>,

    /// Free-form memo
    #[arg(long)]
    pub memo: Option<String>,
}

pub async fn run(chain: &Localchain, args: PostArgs, format: OutputFormat) -> Result<()> {
    let mut payment = match (&args.file, &args.transaction) {
        (Some(path), _) => read_payment(path)?,
        (None, Some(tx)) => Payment::from_transaction(tx.clone()),
        (None, None) => return Err(anyhow!("either --transaction or --file is required")),
    };
    if args.merchant_data.is_some() {
        payment.merchant_data = args.merchant_data;
    }
    if args.refund_to.is_some() {
        payment.refund_to = args.refund_to;
    }
    if args.memo.is_some() {
        payment.memo = args.memo;
    }

    let ack = chain
        .post(&args.topic, payment)
        .await
        .map_err(|e| anyhow!("{}", e))?;

    match format {
        OutputFormat::Text => {
            println!("posted to {}", args.topic);
        }
        OutputFormat::Json => print_json(&ack)?,
    }
    Ok(())
}

fn read_payment(path: &PathBuf) -> Result<Payment> {
    let json = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?
    };
    Ok(serde_json::from_str(&json)?)
}
