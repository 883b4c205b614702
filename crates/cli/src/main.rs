// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lc - localchain CLI

mod commands;
mod completions;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{get, post, prune, tail, watch};
use lc_core::{ChainConfig, TxidParser};
use lc_engine::Localchain;
use output::OutputFormat;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "lc",
    version,
    about = "localchain - filesystem-backed payment event log"
)]
struct Cli {
    /// Chain root directory
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a payment record to a topic
    Post(post::PostArgs),
    /// Look up one record by topic and hash
    Get(get::GetArgs),
    /// Show the most recent records of a topic (or `*` for all)
    Tail(tail::TailArgs),
    /// Follow a topic live, printing records as they are posted
    Watch(watch::WatchArgs),
    /// Reset a topic's tape, optionally archiving it
    Prune(prune::PruneArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completions need no chain
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    setup_logging();

    let config = load_config(cli.config.as_deref(), cli.root)?;
    let chain = Localchain::open(config, Arc::new(TxidParser)).await?;

    match cli.command {
        Commands::Post(args) => post::run(&chain, args, cli.format).await,
        Commands::Get(args) => get::run(&chain, args, cli.format).await,
        Commands::Tail(args) => tail::run(&chain, args, cli.format).await,
        Commands::Watch(args) => watch::run(&chain, args, cli.format).await,
        Commands::Prune(args) => prune::run(&chain, args).await,
        Commands::Completions(_) => Ok(()),
    }
}

fn load_config(config: Option<&std::path::Path>, root: Option<PathBuf>) -> Result<ChainConfig> {
    let mut config = match config {
        Some(path) => ChainConfig::load(path)?,
        None => ChainConfig::default(),
    };
    if let Some(root) = root {
        config.root = root;
    }
    Ok(config)
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
