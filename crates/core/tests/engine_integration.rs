// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Integration tests for pooled dispatchers
//!
//! Drives full listener cascades through the public API, one owner per thread.

use std::sync::{Arc, Mutex};
use std::thread;
use tripwire_core::{
    callback, publishing, Callback, DispatcherPool, EngineConfig, EngineRef, EventEngine,
};

type Log = Arc<Mutex<Vec<String>>>;

fn recording(log: &Log, name: &str) -> Callback {
    let log = Arc::clone(log);
    let name = name.to_string();
    callback(move |_| log.lock().unwrap().push(name.clone()))
}

fn install_cascade(engine: &mut dyn EventEngine, log: &Log) {
    engine.add_immediate_listener("A", publishing("B", recording(log, "b")));
    engine.add_delayed_listener("A", 3, publishing("C", recording(log, "c")));
    engine.add_joint_listener(&["A", "B"], publishing("D", recording(log, "d")));
    engine.add_pattern_listener(&["A", "*", "D"], publishing("E", recording(log, "e")));
    engine.mark_installed();
}

// =============================================================================
// Cascade Tests
// =============================================================================

#[test]
fn cascade_through_pooled_engine() {
    let pool = DispatcherPool::new();
    let log = Log::default();
    pool.get_or_create("alice");

    let engine = pool.engine_for("alice");
    let progress = engine.with(|engine| {
        install_cascade(engine, &log);
        engine.publish("A").unwrap();
        engine.process(100)
    });

    assert!(progress.drained);
    assert_eq!(progress.steps, 5);
    assert_eq!(*log.lock().unwrap(), vec!["b", "d", "e", "c"]);
}

#[test]
fn owners_run_independently_on_their_own_threads() {
    let pool = Arc::new(DispatcherPool::new());
    let owners = ["alice", "bob", "carol", "dave"];

    let handles: Vec<_> = owners
        .iter()
        .map(|owner| {
            let pool = Arc::clone(&pool);
            let owner = owner.to_string();
            thread::spawn(move || {
                let log = Log::default();
                let dispatcher = pool.get_or_create(&owner);
                let mut dispatcher = dispatcher.lock().unwrap();
                install_cascade(&mut *dispatcher, &log);
                dispatcher.publish("A").unwrap();
                let progress = dispatcher.process_default();
                let result = (progress, dispatcher.processed_count(), log.lock().unwrap().clone());
                result
            })
        })
        .collect();

    for handle in handles {
        let (progress, processed, fired) = handle.join().unwrap();
        assert!(progress.drained);
        assert_eq!(processed, 5);
        assert_eq!(fired, vec!["b", "d", "e", "c"]);
    }
    assert_eq!(pool.owners(), vec!["alice", "bob", "carol", "dave"]);
}

#[test]
fn events_for_one_owner_do_not_reach_another() {
    let pool = DispatcherPool::new();
    let log = Log::default();
    pool.get_or_create("alice");
    pool.get_or_create("bob");

    pool.engine_for("alice").with(|engine| install_cascade(engine, &log));
    pool.engine_for("bob").with(|engine| {
        engine.publish("A").unwrap();
        engine.process(100);
    });

    assert!(log.lock().unwrap().is_empty());
    pool.engine_for("alice")
        .with(|engine| assert_eq!(engine.processed_count(), 0));
}

// =============================================================================
// Null Engine Tests
// =============================================================================

#[test]
fn unknown_owner_gets_null_engine() {
    let pool = DispatcherPool::new();
    let log = Log::default();

    let engine = pool.engine_for("ghost");
    assert!(!engine.is_live());

    let progress = engine.with(|engine| {
        install_cascade(engine, &log);
        engine.publish("A").unwrap();
        engine.process(100)
    });

    assert_eq!(progress.steps, 0);
    assert!(progress.drained);
    assert!(log.lock().unwrap().is_empty());
    assert!(!pool.exists("ghost"));
}

#[test]
fn default_engine_ref_is_null() {
    let engine = EngineRef::default();
    assert!(!engine.is_live());
    assert!(!engine.with(|engine| engine.is_installed()));
}

// =============================================================================
// Budget Tests
// =============================================================================

#[test]
fn pool_config_bounds_every_dispatcher() {
    let pool = DispatcherPool::with_config(
        EngineConfig::default()
            .with_queue_capacity(2)
            .with_max_steps(3),
    );
    let dispatcher = pool.get_or_create("alice");
    let mut dispatcher = dispatcher.lock().unwrap();

    dispatcher.add_immediate_listener("loop", callback(|emit| {
        let _ = emit.publish("loop");
    }));
    dispatcher.publish("loop").unwrap();
    dispatcher.publish("x").unwrap();
    assert!(dispatcher.publish("y").is_err());

    let progress = dispatcher.process_default();
    assert_eq!(progress.steps, 3);
    assert!(!progress.drained);
    assert_eq!(dispatcher.pending(), 1);
}
