// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the dispatch engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by dispatcher operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("event queue full (capacity {capacity}), dropped event: {event}")]
    QueueFull { event: String, capacity: usize },
}

/// Errors that can occur while loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
