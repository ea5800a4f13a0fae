// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded FIFO of pending events
//!
//! The queue rejects rather than blocks: a publish against a full queue
//! drops the event and reports [`DispatchError::QueueFull`].

use crate::error::DispatchError;
use std::collections::VecDeque;
use tracing::{error, info};

/// Handle through which callbacks publish follow-up events
///
/// Callbacks run while the dispatcher is mid-step, so they never see the
/// dispatcher itself, only this handle onto its queue.
pub trait Emit {
    fn publish(&mut self, event: &str) -> Result<(), DispatchError>;
}

/// A fixed-capacity event queue
#[derive(Debug, Clone)]
pub struct EventQueue {
    events: VecDeque<String>,
    capacity: usize,
}

impl EventQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Append an event, failing if the queue is at capacity
    pub fn push(&mut self, event: impl Into<String>) -> Result<(), DispatchError> {
        let event = event.into();
        if self.is_full() {
            return Err(DispatchError::QueueFull {
                event,
                capacity: self.capacity,
            });
        }
        self.events.push_back(event);
        Ok(())
    }

    /// Remove the oldest event
    pub fn pop(&mut self) -> Option<String> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.events.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pending events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }
}

impl Emit for EventQueue {
    fn publish(&mut self, event: &str) -> Result<(), DispatchError> {
        match self.push(event) {
            Ok(()) => {
                info!(event, pending = self.len(), "event published");
                Ok(())
            }
            Err(e) => {
                error!(event, capacity = self.capacity, "event queue full, event dropped");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
