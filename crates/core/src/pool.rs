// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyed registry of per-owner dispatchers
//!
//! Dispatchers are created lazily on first lookup and live as long as the
//! pool. The pool only guards its map: once a dispatcher is handed out,
//! access to it is serialized by its own mutex.

use crate::config::EngineConfig;
use crate::dispatcher::Dispatcher;
use crate::engine::EventEngine;
use crate::null::NullDispatcher;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::info;

/// A dispatcher shared between the pool and its callers
pub type SharedDispatcher = Arc<Mutex<Dispatcher>>;

/// Maps owner keys to their dispatcher
#[derive(Debug, Default)]
pub struct DispatcherPool {
    config: EngineConfig,
    dispatchers: RwLock<HashMap<String, SharedDispatcher>>,
}

impl DispatcherPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool whose dispatchers are sized by `config`
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            dispatchers: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Return the dispatcher for `owner`, creating it if absent
    ///
    /// The check and insert happen under one write lock, so concurrent
    /// first lookups for the same owner construct exactly one dispatcher.
    pub fn get_or_create(&self, owner: &str) -> SharedDispatcher {
        let mut dispatchers = self
            .dispatchers
            .write()
            .unwrap_or_else(|e| e.into_inner());

        if let Some(existing) = dispatchers.get(owner) {
            return Arc::clone(existing);
        }

        info!(owner, capacity = self.config.queue_capacity, "creating dispatcher");
        let dispatcher = Arc::new(Mutex::new(Dispatcher::with_config(self.config)));
        dispatchers.insert(owner.to_string(), Arc::clone(&dispatcher));
        dispatcher
    }

    /// Look up an existing dispatcher without creating one
    pub fn get(&self, owner: &str) -> Option<SharedDispatcher> {
        self.dispatchers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(owner)
            .cloned()
    }

    pub fn exists(&self, owner: &str) -> bool {
        self.dispatchers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(owner)
    }

    /// The owner's engine, or the null engine if none has been created
    pub fn engine_for(&self, owner: &str) -> EngineRef {
        match self.get(owner) {
            Some(dispatcher) => EngineRef::Live(dispatcher),
            None => EngineRef::Null(NullDispatcher),
        }
    }

    pub fn len(&self) -> usize {
        self.dispatchers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owner keys with a dispatcher, sorted
    pub fn owners(&self) -> Vec<String> {
        let mut owners: Vec<String> = self
            .dispatchers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        owners.sort();
        owners
    }
}

/// An engine handle that is never absent
#[derive(Debug, Clone)]
pub enum EngineRef {
    Live(SharedDispatcher),
    Null(NullDispatcher),
}

impl EngineRef {
    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut dyn EventEngine) -> R) -> R {
        match self {
            EngineRef::Live(dispatcher) => {
                let mut guard = dispatcher.lock().unwrap_or_else(|e| e.into_inner());
                f(&mut *guard)
            }
            EngineRef::Null(null) => {
                let mut null = *null;
                f(&mut null)
            }
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, EngineRef::Live(_))
    }
}

impl Default for EngineRef {
    fn default() -> Self {
        EngineRef::Null(NullDispatcher)
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
