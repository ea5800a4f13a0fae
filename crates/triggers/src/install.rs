// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attaching registered triggers to an engine, and firing them by name

use crate::error::{CallError, InstallError};
use crate::registry::{Bindings, Classified, Trigger, TriggerRegistry};
use crate::spec::ListenerKind;
use std::sync::Arc;
use tracing::{error, info, warn};
use tripwire_core::{Callback, Emit, EventEngine};

/// Close a trigger body over its instance, adding the completion publish
fn bind<T>(trigger: &Trigger<T>, instance: &Arc<T>, engine: &dyn EventEngine) -> Callback
where
    T: Send + Sync + 'static,
{
    let func = Arc::clone(trigger.func());
    let instance = Arc::clone(instance);
    let callback: Callback = Arc::new(move |emit: &mut dyn Emit| func(&instance, emit));

    match &trigger.spec().publish {
        Some(event) => engine.publish_event(event, callback),
        None => callback,
    }
}

/// Attach every listener trigger in `registry` to `engine`
///
/// Runs at most once per engine: a second call is refused. Every class with
/// listener triggers must have a binding; otherwise nothing is attached.
/// Returns the number of listeners added, which is zero on an engine that
/// is not live.
pub fn install_to_dispatcher<T>(
    registry: &TriggerRegistry<T>,
    bindings: &Bindings<T>,
    engine: &mut dyn EventEngine,
) -> Result<usize, InstallError>
where
    T: Send + Sync + 'static,
{
    if engine.is_installed() {
        warn!("event engine is already installed, skipping");
        return Err(InstallError::AlreadyInstalled);
    }

    let mut plan = Vec::new();
    for (class, triggers) in registry.iter() {
        let listeners: Vec<&Trigger<T>> = triggers.iter().filter(|t| t.is_listener()).collect();
        if listeners.is_empty() {
            continue;
        }
        let Some(instance) = bindings.get(class) else {
            error!(class, "no instance bound for class, install refused");
            return Err(InstallError::Unbound {
                class: class.to_string(),
            });
        };
        plan.push((class, instance, listeners));
    }

    if !engine.is_live() {
        error!("install on an uninstalled event engine, no listeners attached");
        return Ok(0);
    }

    let mut installed = 0;
    for (class, instance, listeners) in plan {
        for trigger in listeners {
            let callback = bind(trigger, instance, &*engine);
            let spec = trigger.spec();
            let events = spec.source_events();

            match (spec.kind, events.as_slice()) {
                (ListenerKind::Immediate, [source]) => {
                    engine.add_immediate_listener(source, callback)
                }
                (ListenerKind::Delayed, [source]) => {
                    engine.add_delayed_listener(source, spec.delay.unwrap_or(0), callback)
                }
                (ListenerKind::Joint, _) => engine.add_joint_listener(&events, callback),
                (ListenerKind::Pattern, _) => engine.add_pattern_listener(&events, callback),
                _ => continue,
            }

            info!(class, trigger = trigger.name(), kind = %spec.kind, "trigger installed");
            installed += 1;
        }
    }

    engine.mark_installed();
    info!(listeners = installed, "event engine installed");
    Ok(installed)
}

/// Fire trigger `name` on `instance` right away, outside the event queue
///
/// Returns `Ok(false)` without doing anything when `instance` is absent or
/// `engine` is not live.
/// The trigger's completion event, if any, is published to `engine`.
pub fn call<T>(
    registry: &TriggerRegistry<T>,
    instance: Option<&Arc<T>>,
    name: &str,
    engine: &mut dyn EventEngine,
) -> Result<bool, CallError>
where
    T: Classified + Send + Sync + 'static,
{
    let Some(instance) = instance else {
        error!(trigger = name, "trigger called without an instance, ignoring");
        return Ok(false);
    };

    let class = instance.class_name();
    if !registry.contains_class(class) {
        return Err(CallError::UnknownClass(class.to_string()));
    }
    let trigger = registry
        .get(class, name)
        .ok_or_else(|| CallError::UnknownTrigger {
            class: class.to_string(),
            trigger: name.to_string(),
        })?;

    if !engine.is_live() {
        error!(
            class,
            trigger = name,
            "trigger called on an uninstalled event engine, ignoring"
        );
        return Ok(false);
    }

    info!(class, trigger = name, "trigger called");
    let callback = bind(trigger, instance, &*engine);
    engine.invoke(&callback);
    Ok(true)
}

#[cfg(test)]
#[path = "install_tests.rs"]
mod tests;
