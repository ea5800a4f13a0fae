// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tripwire-triggers: named triggers installed onto event engines
//!
//! A [`TriggerRegistry`] records, per domain class, which triggers exist and
//! how each one listens. [`install_to_dispatcher`] attaches them to one
//! engine using the instances in a [`Bindings`]; [`call`] fires one by name.

mod error;
mod install;
mod instance_table;
mod registry;
mod spec;

pub use error::{CallError, InstallError, RegistryError};
pub use install::{call, install_to_dispatcher};
pub use instance_table::{InstanceTable, RecordKey};
pub use registry::{Bindings, Classified, Trigger, TriggerFn, TriggerRegistry};
pub use spec::{ListenerKind, Source, TriggerSpec};
