// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lc prune <topic>` - Reset a topic's tape

use anyhow::Result;
use clap::Args;
use lc_engine::Localchain;
use lc_store::PruneOptions;

#[derive(Args)]
pub struct PruneArgs {
    /// Topic whose tape to reset
    pub topic: String,

    /// Rotate the tape into an archive and keep at most this many
    /// archives; without this flag the tape is truncated in place
    #[arg(long)]
    pub archive: Option<u32>,
}

pub async fn run(chain: &Localchain, args: PruneArgs) -> Result<()> {
    let options = match args.archive {
        Some(retain) => PruneOptions::archive(retain),
        None => PruneOptions::truncate(),
    };
    chain.prune(&args.topic, options).await?;
    println!("pruned {}", args.topic);
    Ok(())
}
