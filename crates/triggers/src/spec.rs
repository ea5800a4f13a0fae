// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener metadata attached to a registered trigger

use serde::Deserialize;
use std::fmt;

/// How a trigger is attached to a dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerKind {
    /// Not attached; fired only by calling it by name
    #[default]
    None,
    Immediate,
    Delayed,
    Joint,
    Pattern,
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListenerKind::None => "none",
            ListenerKind::Immediate => "immediate",
            ListenerKind::Delayed => "delayed",
            ListenerKind::Joint => "joint",
            ListenerKind::Pattern => "pattern",
        };
        f.write_str(name)
    }
}

/// The event(s) a trigger listens to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    None,
    /// A single event name (immediate, delayed)
    Event(String),
    /// A set of event names (joint) or a token sequence (pattern)
    Events(Vec<String>),
}

/// Listener kind, source, delay and completion event of one trigger
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriggerSpec {
    pub kind: ListenerKind,
    pub source: Source,
    pub delay: Option<u64>,
    /// Event published after the trigger body returns
    pub publish: Option<String>,
}

impl TriggerSpec {
    /// A trigger that is only fired by name
    pub fn manual() -> Self {
        Self::default()
    }

    pub fn immediate(source: impl Into<String>) -> Self {
        Self {
            kind: ListenerKind::Immediate,
            source: Source::Event(source.into()),
            ..Self::default()
        }
    }

    pub fn delayed(source: impl Into<String>, delay: u64) -> Self {
        Self {
            kind: ListenerKind::Delayed,
            source: Source::Event(source.into()),
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn joint<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ListenerKind::Joint,
            source: Source::Events(sources.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn pattern<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ListenerKind::Pattern,
            source: Source::Events(tokens.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Publish `event` each time the trigger completes
    pub fn publish_on_completion(self, event: impl Into<String>) -> Self {
        Self {
            publish: Some(event.into()),
            ..self
        }
    }

    /// Check that kind, source and delay agree; returns the reason on mismatch
    pub fn check(&self) -> Result<(), String> {
        match (self.kind, &self.source) {
            (ListenerKind::None, Source::None) => {}
            (ListenerKind::None, _) => return Err("manual trigger cannot have a source".into()),
            (ListenerKind::Immediate | ListenerKind::Delayed, Source::Event(name)) => {
                if name.is_empty() {
                    return Err(format!("{} trigger needs a non-empty source", self.kind));
                }
            }
            (ListenerKind::Immediate | ListenerKind::Delayed, _) => {
                return Err(format!("{} trigger needs a single source event", self.kind));
            }
            (ListenerKind::Joint | ListenerKind::Pattern, Source::Events(names)) => {
                if names.is_empty() {
                    return Err(format!("{} trigger needs at least one event", self.kind));
                }
            }
            (ListenerKind::Joint | ListenerKind::Pattern, _) => {
                return Err(format!("{} trigger needs a list of events", self.kind));
            }
        }

        match (self.kind, self.delay) {
            (ListenerKind::Delayed, None) => Err("delayed trigger needs a delay".into()),
            (ListenerKind::Delayed, Some(_)) | (_, None) => Ok(()),
            (_, Some(_)) => Err(format!("{} trigger cannot have a delay", self.kind)),
        }
    }

    /// Source events as string slices, in declaration order
    pub fn source_events(&self) -> Vec<&str> {
        match &self.source {
            Source::None => Vec::new(),
            Source::Event(name) => vec![name.as_str()],
            Source::Events(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
