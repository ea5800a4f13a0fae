// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Class-keyed table of named triggers
//!
//! A registry describes trigger behaviour shared by every owner. It holds no
//! instances: those are supplied per install through [`Bindings`], so one
//! owner's binding can never leak into another owner's dispatcher.

use crate::error::RegistryError;
use crate::spec::{ListenerKind, TriggerSpec};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};
use tripwire_core::Emit;

/// A trigger body, run against the instance bound to its class
pub type TriggerFn<T> = Arc<dyn Fn(&T, &mut dyn Emit) + Send + Sync>;

/// Domain objects that name the trigger class they belong to
pub trait Classified {
    fn class_name(&self) -> &str;
}

/// A named trigger with its listener metadata
pub struct Trigger<T> {
    name: String,
    spec: TriggerSpec,
    func: TriggerFn<T>,
}

impl<T> Trigger<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> &TriggerSpec {
        &self.spec
    }

    pub fn func(&self) -> &TriggerFn<T> {
        &self.func
    }

    /// True if installing attaches this trigger to a dispatcher
    pub fn is_listener(&self) -> bool {
        self.spec.kind != ListenerKind::None
    }
}

impl<T> fmt::Debug for Trigger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("name", &self.name)
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Triggers grouped by class, in registration order within each class
pub struct TriggerRegistry<T> {
    classes: BTreeMap<String, Vec<Trigger<T>>>,
}

impl<T> Default for TriggerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TriggerRegistry<T> {
    pub fn new() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// Register `f` as trigger `name` of `class`
    ///
    /// Returns the stored function. Registering an existing name again
    /// replaces the earlier entry in place.
    pub fn register<F>(
        &mut self,
        class: &str,
        name: &str,
        spec: TriggerSpec,
        f: F,
    ) -> Result<TriggerFn<T>, RegistryError>
    where
        F: Fn(&T, &mut dyn Emit) + Send + Sync + 'static,
    {
        spec.check().map_err(|reason| RegistryError::InvalidSpec {
            class: class.to_string(),
            name: name.to_string(),
            reason,
        })?;

        let func: TriggerFn<T> = Arc::new(f);
        let trigger = Trigger {
            name: name.to_string(),
            spec,
            func: Arc::clone(&func),
        };

        let triggers = self.classes.entry(class.to_string()).or_default();
        match triggers.iter_mut().find(|t| t.name == name) {
            Some(existing) => {
                warn!(class, trigger = name, "trigger re-registered, replacing");
                *existing = trigger;
            }
            None => {
                info!(class, trigger = name, kind = %trigger.spec.kind, "trigger registered");
                triggers.push(trigger);
            }
        }

        Ok(func)
    }

    pub fn get(&self, class: &str, name: &str) -> Option<&Trigger<T>> {
        self.classes.get(class)?.iter().find(|t| t.name == name)
    }

    /// Triggers of `class`, in registration order
    pub fn triggers(&self, class: &str) -> &[Trigger<T>] {
        self.classes.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Registered class names, sorted
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[Trigger<T>])> {
        self.classes
            .iter()
            .map(|(class, triggers)| (class.as_str(), triggers.as_slice()))
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Total number of registered triggers
    pub fn len(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> fmt::Debug for TriggerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.classes.iter()).finish()
    }
}

/// Per-install mapping from class name to the instance its triggers run on
pub struct Bindings<T> {
    instances: HashMap<String, Arc<T>>,
}

impl<T> Default for Bindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bindings<T> {
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Bind `instance` to `class`, replacing any earlier binding
    pub fn bind(&mut self, class: impl Into<String>, instance: Arc<T>) -> &mut Self {
        self.instances.insert(class.into(), instance);
        self
    }

    pub fn get(&self, class: &str) -> Option<&Arc<T>> {
        self.instances.get(class)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<T: Classified> Bindings<T> {
    /// Bind `instance` under its own class name
    pub fn bind_instance(&mut self, instance: Arc<T>) -> &mut Self {
        let class = instance.class_name().to_string();
        self.bind(class, instance)
    }
}

impl<T> fmt::Debug for Bindings<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<&String> = self.instances.keys().collect();
        classes.sort();
        f.debug_struct("Bindings")
            .field("classes", &classes)
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
