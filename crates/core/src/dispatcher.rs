// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step-driven event dispatcher
//!
//! Each step dequeues one event and dispatches it in a fixed order:
//! 1. immediate listeners for the event, in registration order
//! 2. delayed tasks whose trigger step has been reached
//! 3. joint conditions
//! 4. pattern matchers
//!
//! Callbacks may publish further events; those are queued behind the
//! current backlog and handled by later steps.

use crate::callback::{publishing, Callback};
use crate::config::EngineConfig;
use crate::delayed::DelayedTaskHeap;
use crate::engine::{EventEngine, Progress};
use crate::error::DispatchError;
use crate::joint::JointCondition;
use crate::pattern::PatternMatcher;
use crate::queue::{Emit, EventQueue};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// An entry in the immediate-listener table
enum Immediate {
    /// Run the callback when the source is dequeued
    Call(Callback),
    /// Schedule the callback `delay` steps after the source is dequeued
    Defer { delay: u64, callback: Callback },
}

fn fire(callback: &Callback, queue: &mut EventQueue) {
    callback(queue as &mut dyn Emit);
}

/// The live event engine for one owner
pub struct Dispatcher {
    installed: bool,
    processed: u64,
    max_steps: usize,
    queue: EventQueue,
    immediate: HashMap<String, Vec<Immediate>>,
    delayed: DelayedTaskHeap<Callback>,
    joints: Vec<JointCondition>,
    patterns: Vec<PatternMatcher>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            installed: false,
            processed: 0,
            max_steps: config.max_steps,
            queue: EventQueue::new(config.queue_capacity),
            immediate: HashMap::new(),
            delayed: DelayedTaskHeap::new(),
            joints: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Process with the configured step budget
    pub fn process_default(&mut self) -> Progress {
        self.process(self.max_steps)
    }

    /// Events currently queued, oldest first
    pub fn queued(&self) -> impl Iterator<Item = &str> {
        self.queue.iter()
    }

    /// Delayed tasks not yet due
    pub fn delayed_pending(&self) -> usize {
        self.delayed.len()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}

impl EventEngine for Dispatcher {
    fn publish(&mut self, event: &str) -> Result<(), DispatchError> {
        self.queue.publish(event)
    }

    fn process_one_step(&mut self) -> bool {
        let Some(event) = self.queue.pop() else {
            debug!(processed = self.processed, "event queue drained");
            return true;
        };

        self.processed += 1;
        let step = self.processed;
        debug!(event = %event, step, "processing event");

        if let Some(listeners) = self.immediate.get(&event) {
            for listener in listeners {
                match listener {
                    Immediate::Call(callback) => {
                        info!(event = %event, step, "immediate listener triggered");
                        fire(callback, &mut self.queue);
                    }
                    Immediate::Defer { delay, callback } => {
                        let trigger_step = step.saturating_add(*delay);
                        debug!(event = %event, step, trigger_step, "delayed listener scheduled");
                        self.delayed.push(trigger_step, Arc::clone(callback));
                    }
                }
            }
        }

        for callback in self.delayed.drain_due(step) {
            info!(event = %event, step, "delayed listener triggered");
            fire(&callback, &mut self.queue);
        }

        for joint in &mut self.joints {
            joint.on_event(&event, &mut self.queue);
        }

        for matcher in &mut self.patterns {
            matcher.on_event(&event, &mut self.queue);
        }

        debug!(event = %event, step, "event processed");
        false
    }

    fn process(&mut self, max_steps: usize) -> Progress {
        let mut steps = 0;
        while steps < max_steps {
            if self.process_one_step() {
                return Progress {
                    steps,
                    drained: true,
                };
            }
            steps += 1;
        }

        // Budget spent exactly as the queue emptied still counts as drained
        if self.queue.is_empty() {
            return Progress {
                steps,
                drained: true,
            };
        }

        warn!(
            max_steps,
            pending = self.queue.len(),
            "step limit reached, possible event cycle"
        );
        Progress {
            steps,
            drained: false,
        }
    }

    fn add_immediate_listener(&mut self, source: &str, callback: Callback) {
        self.immediate
            .entry(source.to_string())
            .or_default()
            .push(Immediate::Call(callback));
    }

    fn add_delayed_listener(&mut self, source: &str, delay: u64, callback: Callback) {
        self.immediate
            .entry(source.to_string())
            .or_default()
            .push(Immediate::Defer { delay, callback });
    }

    fn add_joint_listener(&mut self, sources: &[&str], callback: Callback) {
        self.joints
            .push(JointCondition::new(sources.iter().copied(), callback));
    }

    fn add_pattern_listener(&mut self, pattern: &[&str], callback: Callback) {
        self.patterns
            .push(PatternMatcher::new(pattern.iter().copied(), callback));
    }

    fn publish_event(&self, event: &str, callback: Callback) -> Callback {
        publishing(event, callback)
    }

    fn invoke(&mut self, callback: &Callback) {
        fire(callback, &mut self.queue);
    }

    fn is_installed(&self) -> bool {
        self.installed
    }

    fn is_live(&self) -> bool {
        true
    }

    fn mark_installed(&mut self) {
        self.installed = true;
    }

    fn processed_count(&self) -> u64 {
        self.processed
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }

    fn listener_count(&self) -> usize {
        self.immediate.values().map(Vec::len).sum::<usize>()
            + self.joints.len()
            + self.patterns.len()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("installed", &self.installed)
            .field("processed", &self.processed)
            .field("pending", &self.queue.len())
            .field("capacity", &self.queue.capacity())
            .field("delayed", &self.delayed.len())
            .field("joints", &self.joints.len())
            .field("patterns", &self.patterns.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
