// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario files: triggers plus the events that drive them
//!
//! ```toml
//! [engine]
//! queue_capacity = 100
//!
//! [[trigger]]
//! class = "Relay"
//! name = "forward"
//! kind = "immediate"
//! source = "A"
//! publish = "B"
//!
//! [run]
//! publish = ["A"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tripwire_core::{ConfigError, EngineConfig, Emit};
use tripwire_triggers::{
    Bindings, Classified, ListenerKind, RegistryError, Source, TriggerRegistry, TriggerSpec,
};

/// Errors that can occur while loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("trigger {trigger}: {kind} trigger needs `{field}`")]
    MissingField {
        trigger: String,
        kind: ListenerKind,
        field: &'static str,
    },
    #[error("invalid call {0:?}: expected <class>.<trigger>")]
    BadCall(String),
}

/// A trigger as written in the scenario file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerDef {
    pub class: String,
    pub name: String,
    #[serde(default)]
    pub kind: ListenerKind,
    pub source: Option<String>,
    pub sources: Option<Vec<String>>,
    pub pattern: Option<Vec<String>>,
    pub delay: Option<u64>,
    /// Completion event
    pub publish: Option<String>,
    /// Events the trigger body publishes
    #[serde(default)]
    pub emit: Vec<String>,
}

impl TriggerDef {
    fn qualified(&self) -> String {
        format!("{}.{}", self.class, self.name)
    }

    fn missing(&self, field: &'static str) -> ScenarioError {
        ScenarioError::MissingField {
            trigger: self.qualified(),
            kind: self.kind,
            field,
        }
    }

    /// Listener metadata for this trigger
    pub fn spec(&self) -> Result<TriggerSpec, ScenarioError> {
        let source = match self.kind {
            ListenerKind::None => Source::None,
            ListenerKind::Immediate | ListenerKind::Delayed => {
                Source::Event(self.source.clone().ok_or_else(|| self.missing("source"))?)
            }
            ListenerKind::Joint => {
                Source::Events(self.sources.clone().ok_or_else(|| self.missing("sources"))?)
            }
            ListenerKind::Pattern => {
                Source::Events(self.pattern.clone().ok_or_else(|| self.missing("pattern"))?)
            }
        };
        if self.kind == ListenerKind::Delayed && self.delay.is_none() {
            return Err(self.missing("delay"));
        }

        Ok(TriggerSpec {
            kind: self.kind,
            source,
            delay: self.delay,
            publish: self.publish.clone(),
        })
    }
}

/// What to do once triggers are registered
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunPlan {
    pub owner: String,
    /// Create and install the owner's dispatcher before running
    pub start: bool,
    /// Triggers fired by name, as `<class>.<trigger>`, before publishing
    pub call: Vec<String>,
    /// Initial events
    pub publish: Vec<String>,
}

impl Default for RunPlan {
    fn default() -> Self {
        Self {
            owner: "default".to_string(),
            start: true,
            call: Vec::new(),
            publish: Vec::new(),
        }
    }
}

/// A parsed scenario file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub engine: EngineConfig,
    #[serde(rename = "trigger")]
    pub triggers: Vec<TriggerDef>,
    pub run: RunPlan,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = toml::from_str(content)?;
        scenario.engine.validate()?;
        for call in &scenario.run.call {
            split_call(call)?;
        }
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScenarioError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&content)
    }

    /// Register every trigger; each body records itself, then publishes its `emit` events
    pub fn registry(&self) -> Result<TriggerRegistry<ScenarioObject>, ScenarioError> {
        let mut registry = TriggerRegistry::new();
        for def in &self.triggers {
            let spec = def.spec()?;
            let qualified = def.qualified();
            let emit = def.emit.clone();
            registry.register(
                &def.class,
                &def.name,
                spec,
                move |object: &ScenarioObject, out: &mut dyn Emit| {
                    object.journal.record(&qualified);
                    for event in &emit {
                        // A full queue is logged by the queue itself
                        let _ = out.publish(event);
                    }
                },
            )?;
        }
        Ok(registry)
    }

    /// One object per class, all writing to `journal`
    pub fn bindings(&self, journal: &Journal) -> Bindings<ScenarioObject> {
        let mut bindings = Bindings::new();
        for def in &self.triggers {
            if bindings.get(&def.class).is_none() {
                bindings.bind_instance(Arc::new(ScenarioObject::new(&def.class, journal)));
            }
        }
        bindings
    }

    /// Number of distinct classes
    pub fn class_count(&self) -> usize {
        let mut classes: Vec<&str> = self.triggers.iter().map(|t| t.class.as_str()).collect();
        classes.sort_unstable();
        classes.dedup();
        classes.len()
    }
}

/// Split `<class>.<trigger>`
pub fn split_call(call: &str) -> Result<(&str, &str), ScenarioError> {
    match call.split_once('.') {
        Some((class, trigger)) if !class.is_empty() && !trigger.is_empty() => Ok((class, trigger)),
        _ => Err(ScenarioError::BadCall(call.to_string())),
    }
}

/// Ordered record of fired triggers, shared by every scenario object
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn record(&self, entry: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// The instance a scenario class's triggers run on
#[derive(Debug)]
pub struct ScenarioObject {
    class: String,
    journal: Journal,
}

impl ScenarioObject {
    pub fn new(class: &str, journal: &Journal) -> Self {
        Self {
            class: class.to_string(),
            journal: journal.clone(),
        }
    }
}

impl Classified for ScenarioObject {
    fn class_name(&self) -> &str {
        &self.class
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
