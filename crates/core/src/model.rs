// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core types for the offline sync queue.
//!
//! This module contains the fundamental data types: QueueItem, HistoryEntry,
//! their status/operation enums, and the per-run summary.
//!
//! Persisted JSON uses the field names of the original web client
//! (`entityType`, `retryCount`, ...) so stored state is interchangeable with
//! payloads produced by it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Maximum number of transport attempts per queue item over its lifetime.
pub const MAX_RETRY_COUNT: u32 = 5;

/// Kind of local mutation captured by a queue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            _ => Err(Error::InvalidOperation(s.to_string())),
        }
    }
}

/// Domain object kind affected by a queued mutation.
///
/// The queue treats the entity payload as opaque; the kind exists only so
/// the remote endpoint can route the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Task,
    Label,
    Project,
}

impl EntityKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Task => "task",
            EntityKind::Label => "label",
            EntityKind::Project => "project",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "task" => Ok(EntityKind::Task),
            "label" => Ok(EntityKind::Label),
            "project" => Ok(EntityKind::Project),
            _ => Err(Error::InvalidEntityKind(s.to_string())),
        }
    }
}

/// Sync status of a queue item.
///
/// `Synced` is absorbing. `Failed` is absorbing once the retry budget is
/// exhausted; until then a failed attempt re-queues the item as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Synced,
    Failed,
}

impl ItemStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Synced => "synced",
            ItemStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ItemStatus::Pending),
            "synced" => Ok(ItemStatus::Synced),
            "failed" => Ok(ItemStatus::Failed),
            _ => Err(Error::InvalidItemStatus(s.to_string())),
        }
    }
}

/// A single pending local mutation awaiting remote confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    /// Unique identifier, generated at enqueue time.
    pub id: String,
    /// The mutation kind.
    pub operation: Operation,
    /// Domain object kind affected.
    pub entity_type: EntityKind,
    /// Identifier of the affected entity.
    pub entity_id: String,
    /// Field-name to new-value mapping; opaque to the queue.
    pub data: serde_json::Map<String, serde_json::Value>,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Current sync status.
    pub status: ItemStatus,
    /// Number of transport attempts made so far. Only ever increases.
    pub retry_count: u32,
    /// Time of the most recent attempt, absent if never attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_attempt_timestamp: Option<DateTime<Utc>>,
    /// Last error message, absent if none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueueItem {
    /// True once the item can never be processed again.
    pub fn is_terminal(&self) -> bool {
        self.status == ItemStatus::Synced || self.retry_count >= MAX_RETRY_COUNT
    }

    /// True if the item exhausted its retry budget without syncing.
    pub fn is_permanently_failed(&self) -> bool {
        self.status != ItemStatus::Synced && self.retry_count >= MAX_RETRY_COUNT
    }
}

/// Partial update applied to a queue item by the sync engine.
///
/// Only fields set to `Some` are merged; everything else is left as-is.
#[derive(Debug, Clone, Default)]
pub struct QueueItemPatch {
    pub status: Option<ItemStatus>,
    pub retry_count: Option<u32>,
    pub last_attempt_timestamp: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl QueueItemPatch {
    /// Merge this patch into an item in place.
    pub fn apply_to(&self, item: &mut QueueItem) {
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(retry_count) = self.retry_count {
            item.retry_count = retry_count;
        }
        if let Some(ts) = self.last_attempt_timestamp {
            item.last_attempt_timestamp = Some(ts);
        }
        if let Some(ref error) = self.error {
            item.error = Some(error.clone());
        }
    }
}

/// What triggered a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    /// User-initiated "sync now".
    ManualSync,
    /// Triggered by the connectivity signal on reconnect.
    AutoSync,
    /// Re-drive of previously failed items.
    Retry,
    /// Explicit queue clear.
    ClearQueue,
}

impl RunKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunKind::ManualSync => "manual_sync",
            RunKind::AutoSync => "auto_sync",
            RunKind::Retry => "retry",
            RunKind::ClearQueue => "clear_queue",
        }
    }
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall outcome of a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Every attempted item succeeded (including an empty run).
    Success,
    /// Some items succeeded, some failed.
    Partial,
    /// Nothing succeeded and at least one item failed.
    Failed,
}

impl RunStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "success",
            RunStatus::Partial => "partial",
            RunStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One completed sync run, as recorded in the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub operation: RunKind,
    pub status: RunStatus,
    pub items_processed: u32,
    pub items_failed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_retrying: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_failures: Option<u32>,
    /// Run duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Aggregated outcome of one sync run over the queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Items confirmed by the remote endpoint this run.
    pub processed: u32,
    /// Items whose attempt failed this run (transient or permanent).
    pub failed: u32,
    /// Items left pending for a later run (waiting on backoff or re-queued).
    pub retrying: u32,
    /// Items that exhausted their retry budget.
    pub permanent_failures: u32,
}

impl RunSummary {
    /// Classify the run for the history log.
    pub fn status(&self) -> RunStatus {
        if self.failed == 0 {
            RunStatus::Success
        } else if self.processed > 0 {
            RunStatus::Partial
        } else {
            RunStatus::Failed
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
