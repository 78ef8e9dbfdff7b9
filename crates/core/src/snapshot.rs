// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Versioned export/import of the sync subsystem's persisted state.
//!
//! Import validates and parses only; restoring the parsed snapshot into
//! live storage is an explicit caller action, mirroring the recovery-slot
//! behavior of the original client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::history::HistoryLog;
use crate::model::{HistoryEntry, QueueItem};
use crate::queue::QueueStore;
use crate::storage::Storage;

/// Snapshot format version this build reads and writes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A point-in-time export of the queue and history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub export_date: DateTime<Utc>,
    pub queue: Vec<QueueItem>,
    pub history: Vec<HistoryEntry>,
}

/// Serialize the current queue and history into a pretty-printed snapshot.
pub fn export_snapshot<S: Storage>(
    queue: &QueueStore<S>,
    history: &HistoryLog<S>,
) -> Result<String> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        export_date: Utc::now(),
        queue: queue.list()?,
        history: history.all()?,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parse and validate a snapshot. Unsupported versions are rejected
/// immediately; there is no migration logic.
pub fn import_snapshot(json: &str) -> Result<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(json)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(Error::UnsupportedSnapshotVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    Ok(snapshot)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
