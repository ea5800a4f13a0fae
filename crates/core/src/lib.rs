// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tripwire-core: in-process event dispatch engine
//!
//! This crate provides:
//! - `Dispatcher` - a step-driven event queue with immediate, delayed,
//!   joint and pattern listeners
//! - `NullDispatcher` - a no-op stand-in with the same operation set
//! - `DispatcherPool` - one lazily created dispatcher per owner key
//!
//! A dispatcher is driven synchronously by its caller and is not safe for
//! concurrent use; the pool hands each one out behind its own mutex.

mod callback;
mod config;
mod delayed;
mod dispatcher;
mod engine;
mod error;
mod joint;
mod null;
mod pattern;
mod pool;
mod queue;

#[cfg(test)]
mod test_logs;

pub use callback::{callback, publishing, Callback};
pub use config::{EngineConfig, DEFAULT_MAX_STEPS, DEFAULT_QUEUE_CAPACITY};
pub use delayed::DelayedTaskHeap;
pub use dispatcher::Dispatcher;
pub use engine::{EventEngine, Progress};
pub use error::{ConfigError, DispatchError};
pub use joint::JointCondition;
pub use null::NullDispatcher;
pub use pattern::{PatternMatcher, WILDCARD};
pub use pool::{DispatcherPool, EngineRef, SharedDispatcher};
pub use queue::{Emit, EventQueue};
