// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conjunctive triggers: fire once every required event has occurred

use crate::callback::Callback;
use crate::queue::Emit;
use std::collections::HashSet;
use std::fmt;
use tracing::info;

/// Tracks an unordered set of required events
pub struct JointCondition {
    required: HashSet<String>,
    occurred: HashSet<String>,
    callback: Callback,
}

impl JointCondition {
    pub fn new<I, S>(sources: I, callback: Callback) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: sources.into_iter().map(Into::into).collect(),
            occurred: HashSet::new(),
            callback,
        }
    }

    /// Record `event`; returns true when this completes the set
    ///
    /// Completing the set clears it. Unrelated events and repeats of an
    /// already-seen event change nothing.
    pub fn observe(&mut self, event: &str) -> bool {
        if !self.required.contains(event) || self.occurred.contains(event) {
            return false;
        }
        self.occurred.insert(event.to_string());
        if self.occurred.len() == self.required.len() {
            self.occurred.clear();
            return true;
        }
        false
    }

    /// Observe `event` and run the callback if the set completed
    pub fn on_event(&mut self, event: &str, emit: &mut dyn Emit) -> bool {
        let fired = self.observe(event);
        if fired {
            info!(event, required = ?self.required, "joint listener triggered");
            (self.callback)(emit);
        }
        fired
    }

    pub fn required(&self) -> &HashSet<String> {
        &self.required
    }

    pub fn occurred(&self) -> &HashSet<String> {
        &self.occurred
    }

    pub fn reset(&mut self) {
        self.occurred.clear();
    }
}

impl fmt::Debug for JointCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JointCondition")
            .field("required", &self.required)
            .field("occurred", &self.occurred)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "joint_tests.rs"]
mod tests;
