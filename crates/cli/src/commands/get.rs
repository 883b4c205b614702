// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lc get <topic> <hash>` - Point lookup of one record

use crate::output::{print_delivery, OutputFormat};
use anyhow::Result;
use clap::Args;
use lc_engine::Localchain;

#[derive(Args)]
pub struct GetArgs {
    /// Topic the record was posted under
    pub topic: String,
    /// Record hash
    pub hash: String,
}

pub async fn run(chain: &Localchain, args: GetArgs, format: OutputFormat) -> Result<()> {
    let delivery = chain.get(&args.topic, &args.hash).await?;
    print_delivery(&delivery, format)
}
