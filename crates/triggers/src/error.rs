// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for trigger registration, installation and invocation

use thiserror::Error;

/// Errors that can occur while registering a trigger
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid trigger {class}.{name}: {reason}")]
    InvalidSpec {
        class: String,
        name: String,
        reason: String,
    },
}

/// Errors that refuse an install without touching the engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstallError {
    #[error("event engine is already installed")]
    AlreadyInstalled,
    #[error("no instance bound for class {class}")]
    Unbound { class: String },
}

/// Errors that can occur when invoking a trigger by name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("no triggers registered for class {0}")]
    UnknownClass(String),
    #[error("unknown trigger {class}.{trigger}")]
    UnknownTrigger { class: String, trigger: String },
}
