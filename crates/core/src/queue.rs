// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable ordered store of pending mutations.
//!
//! Items are kept as a JSON array under a fixed key and the full collection
//! is rewritten on every mutation. Successful items stay in the queue with
//! `status = synced` for audit until an explicit clear; only [`clear`]
//! removes records.
//!
//! [`clear`]: QueueStore::clear

use chrono::Utc;

use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::model::{
    EntityKind, ItemStatus, Operation, QueueItem, QueueItemPatch, MAX_RETRY_COUNT,
};
use crate::storage::{Storage, SYNC_QUEUE_KEY};

/// Durable, ordered storage of queue items surviving process restart.
pub struct QueueStore<S: Storage> {
    storage: S,
}

impl<S: Storage> QueueStore<S> {
    /// Create a queue store over the given persistence backend.
    pub fn new(storage: S) -> Self {
        QueueStore { storage }
    }

    /// Append a new pending item. Always succeeds; no dedupe, no validation
    /// of the payload shape.
    pub fn enqueue(
        &mut self,
        operation: Operation,
        entity_type: EntityKind,
        entity_id: &str,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Result<QueueItem> {
        let mut items = self.list()?;
        let now = Utc::now();
        let id = generate_unique_id("q", entity_id, &now, |candidate| {
            items.iter().any(|item| item.id == candidate)
        });

        let item = QueueItem {
            id,
            operation,
            entity_type,
            entity_id: entity_id.to_string(),
            data,
            timestamp: now,
            status: ItemStatus::Pending,
            retry_count: 0,
            last_attempt_timestamp: None,
            error: None,
        };

        items.push(item.clone());
        self.write_items(&items)?;

        tracing::debug!(
            id = %item.id,
            operation = %operation,
            entity = %entity_type,
            "enqueued offline mutation"
        );

        Ok(item)
    }

    /// Enqueue a create mutation.
    pub fn enqueue_create(
        &mut self,
        entity_type: EntityKind,
        entity_id: &str,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Result<QueueItem> {
        self.enqueue(Operation::Create, entity_type, entity_id, data)
    }

    /// Enqueue an update mutation.
    pub fn enqueue_update(
        &mut self,
        entity_type: EntityKind,
        entity_id: &str,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Result<QueueItem> {
        self.enqueue(Operation::Update, entity_type, entity_id, data)
    }

    /// Enqueue a delete mutation. Deletes carry no payload.
    pub fn enqueue_delete(&mut self, entity_type: EntityKind, entity_id: &str) -> Result<QueueItem> {
        self.enqueue(
            Operation::Delete,
            entity_type,
            entity_id,
            serde_json::Map::new(),
        )
    }

    /// Snapshot of all items in insertion order.
    pub fn list(&self) -> Result<Vec<QueueItem>> {
        let Some(raw) = self.storage.get(SYNC_QUEUE_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| Error::CorruptedData {
            key: SYNC_QUEUE_KEY.to_string(),
            reason: e.to_string(),
        })
    }

    /// Merge the patch into the matching item. No-op if the id is unknown.
    pub fn update(&mut self, id: &str, patch: &QueueItemPatch) -> Result<()> {
        let mut items = self.list()?;
        if let Some(item) = items.iter_mut().find(|item| item.id == id) {
            patch.apply_to(item);
            self.write_items(&items)?;
        }
        Ok(())
    }

    /// Remove all items unconditionally. Returns the number removed.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.list()?.len();
        self.write_items(&[])?;
        Ok(count)
    }

    /// Items awaiting their first confirmation.
    pub fn count_pending(&self) -> Result<usize> {
        Ok(self
            .list()?
            .iter()
            .filter(|item| item.status == ItemStatus::Pending)
            .count())
    }

    /// Pending items that already have at least one failed attempt behind them.
    pub fn count_retrying(&self) -> Result<usize> {
        Ok(self
            .list()?
            .iter()
            .filter(|item| item.status == ItemStatus::Pending && item.retry_count > 0)
            .count())
    }

    /// Items marked failed or out of retry budget.
    pub fn count_failed(&self) -> Result<usize> {
        Ok(self
            .list()?
            .iter()
            .filter(|item| item.status == ItemStatus::Failed || item.retry_count >= MAX_RETRY_COUNT)
            .count())
    }

    /// Persist the full collection synchronously.
    fn write_items(&mut self, items: &[QueueItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.storage.put(SYNC_QUEUE_KEY, &json)
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
