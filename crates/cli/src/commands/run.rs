// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tw run <scenario>` - Install a scenario's triggers and drain its events

use crate::output::{self, OutputFormat};
use crate::scenario::{split_call, Journal, Scenario, ScenarioObject};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tripwire_core::{DispatcherPool, EngineConfig};
use tripwire_triggers::{call, install_to_dispatcher};

#[derive(Args)]
pub struct RunArgs {
    /// Scenario file (TOML)
    pub scenario: PathBuf,

    /// Owner key to run as (overrides the scenario)
    #[arg(long)]
    pub owner: Option<String>,

    /// Step budget for draining (overrides the scenario's engine config)
    #[arg(long)]
    pub max_steps: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// What happened during a run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub owner: String,
    /// False when the run went to the null engine
    pub live: bool,
    /// Triggers in firing order, as `<class>.<trigger>`
    pub fired: Vec<String>,
    /// Initial events the queue refused
    pub rejected: Vec<String>,
    pub steps: usize,
    pub processed: u64,
    pub drained: bool,
    pub pending: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trigger in &self.fired {
            writeln!(f, "fired {}", trigger)?;
        }
        for event in &self.rejected {
            writeln!(f, "rejected {}", event)?;
        }
        if !self.live {
            writeln!(f, "engine not started for owner {}", self.owner)?;
        }
        writeln!(f, "processed {} events", self.processed)?;
        if self.drained {
            writeln!(f, "drained")
        } else {
            writeln!(f, "step budget exhausted ({} pending)", self.pending)
        }
    }
}

/// Run `scenario` as `owner` on a fresh pool
pub fn execute(scenario: &Scenario, owner: &str, config: EngineConfig) -> Result<RunReport> {
    let registry = scenario.registry()?;
    let journal = Journal::default();
    let bindings = scenario.bindings(&journal);
    let pool = DispatcherPool::with_config(config);

    if scenario.run.start {
        let dispatcher = pool.get_or_create(owner);
        let mut dispatcher = dispatcher.lock().unwrap_or_else(|e| e.into_inner());
        let installed = install_to_dispatcher(&registry, &bindings, &mut *dispatcher)?;
        info!(owner, installed, "scenario installed");
    }

    let engine = pool.engine_for(owner);
    let live = engine.is_live();

    engine.with(|engine| {
        for target in &scenario.run.call {
            let (class, trigger) = split_call(target)?;
            let instance = bindings
                .get(class)
                .cloned()
                .unwrap_or_else(|| Arc::new(ScenarioObject::new(class, &journal)));
            call(&registry, Some(&instance), trigger, engine)?;
        }

        let rejected = scenario
            .run
            .publish
            .iter()
            .filter(|event| engine.publish(event).is_err())
            .cloned()
            .collect();

        let progress = engine.process(config.max_steps);

        Ok(RunReport {
            owner: owner.to_string(),
            live,
            fired: journal.entries(),
            rejected,
            steps: progress.steps,
            processed: engine.processed_count(),
            drained: progress.drained,
            pending: engine.pending(),
        })
    })
}

pub fn handle(args: RunArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let owner = args.owner.unwrap_or_else(|| scenario.run.owner.clone());
    let mut config = scenario.engine;
    if let Some(max_steps) = args.max_steps {
        config = config.with_max_steps(max_steps);
    }
    config.validate()?;

    let report = execute(&scenario, &owner, config)?;
    output::print(&report, args.format);
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
