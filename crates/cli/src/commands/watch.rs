// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lc watch <topic>` - Follow a tape live

use crate::output::{print_delivery, OutputFormat};
use anyhow::Result;
use clap::Args;
use lc_engine::Localchain;

#[derive(Args)]
pub struct WatchArgs {
    /// Topic to follow, or `*` for every topic
    pub topic: String,

    /// Stop after this many deliveries (default: run until Ctrl-C)
    #[arg(long)]
    pub count: Option<usize>,
}

pub async fn run(chain: &Localchain, args: WatchArgs, format: OutputFormat) -> Result<()> {
    let mut subscription = chain.subscribe(&args.topic).await?;
    tracing::info!(topic = %args.topic, "watching");

    let mut seen = 0usize;
    loop {
        tokio::select! {
            delivery = subscription.recv() => {
                match delivery {
                    Some(delivery) => {
                        print_delivery(&delivery, format)?;
                        seen += 1;
                        if args.count.is_some_and(|count| seen >= count) {
                            return Ok(());
                        }
                    }
                    None => {
                        // watcher stopped; failure details are on the log
                        tracing::warn!(topic = %args.topic, "watch ended");
                        return Ok(());
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                return Ok(());
            }
        }
    }
}
