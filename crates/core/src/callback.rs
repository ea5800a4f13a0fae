// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener callbacks

use crate::queue::Emit;
use std::sync::Arc;

/// A side-effecting listener body
///
/// Callbacks are shared rather than owned because a delayed listener
/// schedules the same callback every time its source fires.
pub type Callback = Arc<dyn Fn(&mut dyn Emit) + Send + Sync>;

/// Wrap a closure as a [`Callback`]
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(&mut dyn Emit) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap `callback` so that it publishes `event` after it returns
pub fn publishing(event: impl Into<String>, callback: Callback) -> Callback {
    let event = event.into();
    Arc::new(move |emit: &mut dyn Emit| {
        callback(&mut *emit);
        // A full queue is logged by the queue itself
        let _ = emit.publish(&event);
    })
}
