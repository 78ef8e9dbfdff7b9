// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the doq-core library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid operation: '{0}'\n  hint: valid operations are: create, update, delete")]
    InvalidOperation(String),

    #[error("invalid entity type: '{0}'\n  hint: valid entity types are: task, label, project")]
    InvalidEntityKind(String),

    #[error("invalid item status: '{0}'\n  hint: valid statuses are: pending, synced, failed")]
    InvalidItemStatus(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted state under a known key failed to deserialize.
    ///
    /// Deliberately fatal: silently dropping queued mutations would lose
    /// user data, so readers propagate this instead of recovering.
    #[error("corrupted data under key '{key}': {reason}")]
    CorruptedData { key: String, reason: String },

    #[error("unsupported snapshot version: {found} (expected {expected})")]
    UnsupportedSnapshotVersion { found: u32, expected: u32 },

    #[error("a sync run is already in progress")]
    SyncInProgress,
}

/// A specialized Result type for doq-core operations.
pub type Result<T> = std::result::Result<T, Error>;
