// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tw - tripwire scenario runner

mod commands;
mod logging;
mod output;
mod scenario;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{check, run};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tw",
    version,
    about = "tripwire - run event trigger scenarios"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a scenario's triggers, publish its events and drain them
    Run(run::RunArgs),
    /// Validate a scenario file
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Run(args) => run::handle(args),
        Commands::Check(args) => check::handle(args),
    }
}
