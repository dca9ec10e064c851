// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! marinara - a cyclic work/break interval timer for the terminal

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Defaults;

#[derive(Parser)]
#[command(
    name = "marinara",
    version,
    about = "Cyclic work/break interval timer"
)]
struct Cli {
    /// Path to a defaults file (falls back to ./marinara.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a period format string
    Check(commands::check::CheckArgs),
    /// Run a timer in the terminal
    Run(commands::run::RunArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = Defaults::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check(args) => commands::check::check(args, &defaults),
        Commands::Run(args) => commands::run::run(args, &defaults).await,
    }
}
