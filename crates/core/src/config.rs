// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration
//!
//! Every field has a default, so an empty TOML document is a valid config.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Default number of events a dispatcher queue holds before rejecting
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// Default step budget for a single `process` call
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Sizing for dispatchers created by a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Hard capacity of the pending-event queue
    pub queue_capacity: usize,
    /// Step budget used by `process_default`
    pub max_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn with_queue_capacity(self, queue_capacity: usize) -> Self {
        Self {
            queue_capacity,
            ..self
        }
    }

    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    /// Reject sizes that would make every publish or process a no-op
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_steps == 0 {
            return Err(ConfigError::Invalid(
                "max_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
