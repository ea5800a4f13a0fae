// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence triggers: fire when the event stream matches an ordered pattern
//!
//! The matcher tracks a single alignment. On a mismatch it resets and
//! retries only the current event against the first token; it never
//! searches other restart points, so overlapping matches are not found.

use crate::callback::Callback;
use crate::queue::Emit;
use std::fmt;
use tracing::info;

/// Pattern token that matches any event
pub const WILDCARD: &str = "*";

/// Single-sequence state machine over event tokens
pub struct PatternMatcher {
    pattern: Vec<String>,
    position: usize,
    callback: Callback,
}

impl PatternMatcher {
    pub fn new<I, S>(pattern: I, callback: Callback) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into_iter().map(Into::into).collect(),
            position: 0,
            callback,
        }
    }

    fn accepts(&self, index: usize, event: &str) -> bool {
        self.pattern
            .get(index)
            .is_some_and(|token| token == WILDCARD || token == event)
    }

    /// Feed `event`; returns true when it completes the pattern
    ///
    /// A completed match resets the position to zero. An empty pattern
    /// never matches.
    pub fn advance(&mut self, event: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }

        if self.accepts(self.position, event) {
            self.position += 1;
        } else {
            self.position = 0;
            if self.accepts(0, event) {
                self.position = 1;
            }
        }

        if self.position == self.pattern.len() {
            self.position = 0;
            return true;
        }
        false
    }

    /// Advance on `event` and run the callback on a completed match
    pub fn on_event(&mut self, event: &str, emit: &mut dyn Emit) -> bool {
        let fired = self.advance(event);
        if fired {
            info!(event, pattern = ?self.pattern, "pattern listener triggered");
            (self.callback)(emit);
        }
        fired
    }

    pub fn pattern(&self) -> &[String] {
        &self.pattern
    }

    /// Index of the next token to match
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl fmt::Debug for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternMatcher")
            .field("pattern", &self.pattern)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
