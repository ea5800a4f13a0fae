// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tw check <scenario>` - Validate a scenario without running it

use crate::scenario::Scenario;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Scenario file (TOML)
    pub scenario: PathBuf,
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let registry = scenario.registry()?;

    println!(
        "ok: {} triggers across {} classes",
        registry.len(),
        scenario.class_count()
    );
    Ok(())
}
