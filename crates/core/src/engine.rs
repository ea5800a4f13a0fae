// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The operation set shared by the live and null engines

use crate::callback::Callback;
use crate::error::DispatchError;

/// Outcome of a bounded `process` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Events dequeued during this call
    pub steps: usize,
    /// True if the queue was empty when processing stopped
    pub drained: bool,
}

/// An event engine
///
/// Implementations are driven synchronously on the caller's thread and carry
/// no internal synchronization: callers serialize every operation against a
/// single engine.
pub trait EventEngine: Send {
    /// Append an event to the pending queue
    fn publish(&mut self, event: &str) -> Result<(), DispatchError>;

    /// Dequeue and dispatch one event; returns true if there was nothing to do
    fn process_one_step(&mut self) -> bool;

    /// Step until drained or until `max_steps` events have been dispatched
    fn process(&mut self, max_steps: usize) -> Progress;

    /// Fire `callback` every time `source` is dequeued
    fn add_immediate_listener(&mut self, source: &str, callback: Callback);

    /// Fire `callback` once `delay` further events have been dequeued after `source`
    fn add_delayed_listener(&mut self, source: &str, delay: u64, callback: Callback);

    /// Fire `callback` once every event in `sources` has occurred, in any order
    fn add_joint_listener(&mut self, sources: &[&str], callback: Callback);

    /// Fire `callback` when the event stream matches `pattern` (`*` matches any event)
    fn add_pattern_listener(&mut self, pattern: &[&str], callback: Callback);

    /// Wrap `callback` so that it publishes `event` on completion
    fn publish_event(&self, event: &str, callback: Callback) -> Callback;

    /// Run `callback` now, outside the queue, with this engine as its emitter
    fn invoke(&mut self, callback: &Callback);

    fn is_installed(&self) -> bool;

    /// False for engines that discard every operation
    fn is_live(&self) -> bool;

    /// Record that the trigger table has been installed
    fn mark_installed(&mut self);

    /// Events dequeued over the engine's lifetime
    fn processed_count(&self) -> u64;

    /// Events waiting in the queue
    fn pending(&self) -> usize;

    /// Registered listeners of every kind
    fn listener_count(&self) -> usize;
}
