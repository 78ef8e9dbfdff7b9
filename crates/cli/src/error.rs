// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the doqrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'doq init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("--data must be a JSON object (e.g. '{{\"title\": \"buy milk\"}}')")]
    DataNotObject,

    #[error("invalid offline mode '{0}' (expected 'on' or 'off')")]
    InvalidOfflineMode(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] doq_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for doqrs operations.
pub type Result<T> = std::result::Result<T, Error>;
