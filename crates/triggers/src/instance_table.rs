// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stable external identifiers for domain records
//!
//! Maps `(type_tag, record_id)` to an opaque UUID and back, so request
//! handlers can name a bound instance without exposing storage keys.

use std::collections::HashMap;
use uuid::Uuid;

/// A domain record as storage identifies it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub type_tag: String,
    pub record_id: u64,
}

impl RecordKey {
    pub fn new(type_tag: impl Into<String>, record_id: u64) -> Self {
        Self {
            type_tag: type_tag.into(),
            record_id,
        }
    }
}

/// Two-way map between records and external ids
#[derive(Debug, Default, Clone)]
pub struct InstanceTable {
    by_record: HashMap<RecordKey, Uuid>,
    by_id: HashMap<Uuid, RecordKey>,
}

impl InstanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// External id for a record, assigning a fresh one on first sight
    pub fn register(&mut self, type_tag: &str, record_id: u64) -> Uuid {
        let key = RecordKey::new(type_tag, record_id);
        if let Some(id) = self.by_record.get(&key) {
            return *id;
        }
        let id = Uuid::new_v4();
        self.by_id.insert(id, key.clone());
        self.by_record.insert(key, id);
        id
    }

    pub fn external_id(&self, type_tag: &str, record_id: u64) -> Option<Uuid> {
        self.by_record
            .get(&RecordKey::new(type_tag, record_id))
            .copied()
    }

    pub fn resolve(&self, id: &Uuid) -> Option<&RecordKey> {
        self.by_id.get(id)
    }

    /// Resolve an id given as text; malformed ids resolve to nothing
    pub fn resolve_str(&self, id: &str) -> Option<&RecordKey> {
        let id = Uuid::parse_str(id).ok()?;
        self.resolve(&id)
    }

    /// Forget a record; returns its id if it was known
    pub fn remove(&mut self, type_tag: &str, record_id: u64) -> Option<Uuid> {
        let id = self
            .by_record
            .remove(&RecordKey::new(type_tag, record_id))?;
        self.by_id.remove(&id);
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.by_record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_record.is_empty()
    }
}

#[cfg(test)]
#[path = "instance_table_tests.rs"]
mod tests;
