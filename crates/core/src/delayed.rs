// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step-keyed min-heap for delayed listeners
//!
//! Delays are counted in dequeued events, not wall-clock time. Entries that
//! share a trigger step come out in the order they were pushed.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A task waiting for the processed-event counter to reach its trigger step
#[derive(Debug)]
struct DelayedTask<T> {
    trigger_step: u64,
    seq: u64,
    task: T,
}

impl<T> DelayedTask<T> {
    fn key(&self) -> Reverse<(u64, u64)> {
        Reverse((self.trigger_step, self.seq))
    }
}

impl<T> PartialEq for DelayedTask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.trigger_step == other.trigger_step && self.seq == other.seq
    }
}

impl<T> Eq for DelayedTask<T> {}

impl<T> PartialOrd for DelayedTask<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for DelayedTask<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: earliest step first, then insertion order
        self.key().cmp(&other.key())
    }
}

/// Min-heap of tasks keyed by trigger step
#[derive(Debug)]
pub struct DelayedTaskHeap<T> {
    tasks: BinaryHeap<DelayedTask<T>>,
    next_seq: u64,
}

impl<T> Default for DelayedTaskHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DelayedTaskHeap<T> {
    pub fn new() -> Self {
        Self {
            tasks: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` to become due once the counter reaches `trigger_step`
    pub fn push(&mut self, trigger_step: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(DelayedTask {
            trigger_step,
            seq,
            task,
        });
    }

    /// Earliest pending trigger step
    pub fn next_step(&self) -> Option<u64> {
        self.tasks.peek().map(|t| t.trigger_step)
    }

    /// Pop every task with `trigger_step <= step`, earliest first
    pub fn drain_due(&mut self, step: u64) -> Vec<T> {
        let mut due = Vec::new();

        while let Some(next) = self.tasks.peek() {
            if next.trigger_step > step {
                break;
            }
            let Some(next) = self.tasks.pop() else {
                break;
            };
            due.push(next.task);
        }

        due
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
#[path = "delayed_tests.rs"]
mod tests;
