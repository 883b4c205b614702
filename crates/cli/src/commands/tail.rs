// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lc tail <topic>` - Windowed lookup over a tape's history

use crate::output::{print_delivery, OutputFormat};
use anyhow::Result;
use clap::Args;
use lc_engine::Localchain;

#[derive(Args)]
pub struct TailArgs {
    /// Topic to read, or `*` for the global tape
    pub topic: String,

    /// Number of most recent records to return
    #[arg(long, short = 'n', default_value = "10")]
    pub size: usize,
}

pub async fn run(chain: &Localchain, args: TailArgs, format: OutputFormat) -> Result<()> {
    let deliveries = chain.tail(&args.topic, args.size).await?;
    for delivery in &deliveries {
        print_delivery(delivery, format)?;
    }
    Ok(())
}
