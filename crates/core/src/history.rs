// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only log of sync runs, bounded to the most recent entries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::model::{HistoryEntry, RunKind, RunStatus};
use crate::storage::{Storage, SYNC_HISTORY_KEY};

/// Maximum number of entries retained; oldest are dropped first.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Fields of a history entry supplied by the caller; id and timestamp are
/// filled in on append.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub operation: RunKind,
    pub status: RunStatus,
    pub items_processed: u32,
    pub items_failed: u32,
    pub items_retrying: Option<u32>,
    pub permanent_failures: Option<u32>,
    pub duration: Option<u64>,
    pub error_message: Option<String>,
}

/// Aggregate statistics over the retained history, computed by full scan.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncStats {
    pub total_syncs: usize,
    pub successful_syncs: usize,
    pub failed_syncs: usize,
    /// Percentage in [0, 100].
    pub success_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_time: Option<DateTime<Utc>>,
    /// Mean duration in milliseconds over entries that recorded one.
    pub average_duration: f64,
}

/// Bounded history log over a key/value persistence backend.
pub struct HistoryLog<S: Storage> {
    storage: S,
}

impl<S: Storage> HistoryLog<S> {
    /// Create a history log over the given persistence backend.
    pub fn new(storage: S) -> Self {
        HistoryLog { storage }
    }

    /// Append an entry, trimming to the newest [`MAX_HISTORY_ENTRIES`].
    pub fn append(&mut self, entry: NewHistoryEntry) -> Result<HistoryEntry> {
        let mut entries = self.read_entries()?;
        let now = Utc::now();
        let id = generate_unique_id("h", entry.operation.as_str(), &now, |candidate| {
            entries.iter().any(|e| e.id == candidate)
        });

        let entry = HistoryEntry {
            id,
            timestamp: now,
            operation: entry.operation,
            status: entry.status,
            items_processed: entry.items_processed,
            items_failed: entry.items_failed,
            items_retrying: entry.items_retrying,
            permanent_failures: entry.permanent_failures,
            duration: entry.duration,
            error_message: entry.error_message,
        };

        entries.push(entry.clone());
        if entries.len() > MAX_HISTORY_ENTRIES {
            let excess = entries.len() - MAX_HISTORY_ENTRIES;
            entries.drain(..excess);
        }
        self.write_entries(&entries)?;

        Ok(entry)
    }

    /// All retained entries in insertion order (oldest first).
    pub fn all(&self) -> Result<Vec<HistoryEntry>> {
        self.read_entries()
    }

    /// The most recent `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let entries = self.read_entries()?;
        Ok(entries.into_iter().rev().take(limit).collect())
    }

    /// Most recent entry with a fully successful outcome, if any.
    pub fn last_successful(&self) -> Result<Option<HistoryEntry>> {
        let entries = self.read_entries()?;
        Ok(entries
            .into_iter()
            .rev()
            .find(|entry| entry.status == RunStatus::Success))
    }

    /// Aggregate statistics. Full scan; acceptable at the bounded size.
    pub fn stats(&self) -> Result<SyncStats> {
        let entries = self.read_entries()?;

        let total_syncs = entries.len();
        let successful_syncs = entries
            .iter()
            .filter(|e| e.status == RunStatus::Success)
            .count();
        let failed_syncs = entries
            .iter()
            .filter(|e| e.status == RunStatus::Failed)
            .count();
        let success_rate = if total_syncs > 0 {
            successful_syncs as f64 / total_syncs as f64 * 100.0
        } else {
            0.0
        };

        let durations: Vec<u64> = entries.iter().filter_map(|e| e.duration).collect();
        let average_duration = if durations.is_empty() {
            0.0
        } else {
            durations.iter().sum::<u64>() as f64 / durations.len() as f64
        };

        Ok(SyncStats {
            total_syncs,
            successful_syncs,
            failed_syncs,
            success_rate,
            last_sync_time: entries.last().map(|e| e.timestamp),
            average_duration,
        })
    }

    /// Drop all retained history.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(SYNC_HISTORY_KEY)
    }

    fn read_entries(&self) -> Result<Vec<HistoryEntry>> {
        let Some(raw) = self.storage.get(SYNC_HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| Error::CorruptedData {
            key: SYNC_HISTORY_KEY.to_string(),
            reason: e.to_string(),
        })
    }

    fn write_entries(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.storage.put(SYNC_HISTORY_KEY, &json)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
