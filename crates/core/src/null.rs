// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stand-in engine for call sites that have no live dispatcher yet
//!
//! Every operation logs the misuse and does nothing, so callers can hold an
//! engine unconditionally instead of checking for presence.

use crate::callback::Callback;
use crate::engine::{EventEngine, Progress};
use crate::error::DispatchError;
use tracing::error;

/// An engine that performs no work
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullDispatcher;

impl NullDispatcher {
    fn misuse(operation: &str, event: Option<&str>) {
        error!(
            operation,
            event,
            "operating on an uninstalled event engine, nothing will happen"
        );
    }
}

impl EventEngine for NullDispatcher {
    fn publish(&mut self, event: &str) -> Result<(), DispatchError> {
        Self::misuse("publish", Some(event));
        Ok(())
    }

    fn process_one_step(&mut self) -> bool {
        Self::misuse("process_one_step", None);
        true
    }

    fn process(&mut self, _max_steps: usize) -> Progress {
        Self::misuse("process", None);
        Progress {
            steps: 0,
            drained: true,
        }
    }

    fn add_immediate_listener(&mut self, _source: &str, _callback: Callback) {
        Self::misuse("add_immediate_listener", None);
    }

    fn add_delayed_listener(&mut self, _source: &str, _delay: u64, _callback: Callback) {
        Self::misuse("add_delayed_listener", None);
    }

    fn add_joint_listener(&mut self, _sources: &[&str], _callback: Callback) {
        Self::misuse("add_joint_listener", None);
    }

    fn add_pattern_listener(&mut self, _pattern: &[&str], _callback: Callback) {
        Self::misuse("add_pattern_listener", None);
    }

    fn publish_event(&self, _event: &str, callback: Callback) -> Callback {
        Self::misuse("publish_event", None);
        callback
    }

    fn invoke(&mut self, _callback: &Callback) {
        Self::misuse("invoke", None);
    }

    fn is_installed(&self) -> bool {
        false
    }

    fn is_live(&self) -> bool {
        false
    }

    fn mark_installed(&mut self) {
        Self::misuse("mark_installed", None);
    }

    fn processed_count(&self) -> u64 {
        0
    }

    fn pending(&self) -> usize {
        0
    }

    fn listener_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
#[path = "null_tests.rs"]
mod tests;
