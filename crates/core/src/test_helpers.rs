// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for doq-core tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::model::{EntityKind, ItemStatus, Operation, QueueItem};
use crate::transport::{Transport, TransportError, TransportResult};

/// Create a pending queue item with the given id, never attempted.
pub fn make_item(id: &str) -> QueueItem {
    QueueItem {
        id: id.to_string(),
        operation: Operation::Create,
        entity_type: EntityKind::Task,
        entity_id: format!("task-{}", id),
        data: data_with("title", "write tests"),
        timestamp: Utc::now(),
        status: ItemStatus::Pending,
        retry_count: 0,
        last_attempt_timestamp: None,
        error: None,
    }
}

/// Create an item with retry bookkeeping already populated.
pub fn make_attempted_item(
    id: &str,
    retry_count: u32,
    last_attempt: DateTime<Utc>,
) -> QueueItem {
    let mut item = make_item(id);
    item.retry_count = retry_count;
    item.last_attempt_timestamp = Some(last_attempt);
    item
}

/// A single-entry data payload.
pub fn data_with(key: &str, value: &str) -> serde_json::Map<String, serde_json::Value> {
    let mut data = serde_json::Map::new();
    data.insert(key.to_string(), serde_json::Value::from(value));
    data
}

/// A timestamp `ms` milliseconds in the past.
pub fn millis_ago(ms: i64) -> DateTime<Utc> {
    Utc::now() - Duration::milliseconds(ms)
}

/// Scripted transport for engine tests.
///
/// Pops one scripted outcome per send; once the script is exhausted, every
/// further send succeeds (or fails, if constructed with `always_failing`).
pub struct MockTransport {
    script: Mutex<VecDeque<TransportResult<()>>>,
    fail_when_exhausted: bool,
    calls: AtomicUsize,
}

impl MockTransport {
    /// Every send succeeds.
    pub fn always_ok() -> Self {
        MockTransport {
            script: Mutex::new(VecDeque::new()),
            fail_when_exhausted: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every send fails with a transient error.
    pub fn always_failing() -> Self {
        MockTransport {
            script: Mutex::new(VecDeque::new()),
            fail_when_exhausted: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Replay the given outcomes in order, then succeed.
    pub fn with_script(outcomes: Vec<TransportResult<()>>) -> Self {
        MockTransport {
            script: Mutex::new(outcomes.into()),
            fail_when_exhausted: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of send calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        _item: &QueueItem,
    ) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(outcome) = self.script.lock().unwrap().pop_front() {
                return outcome;
            }
            if self.fail_when_exhausted {
                Err(TransportError::SendFailed(
                    "network error: connection timeout".to_string(),
                ))
            } else {
                Ok(())
            }
        })
    }
}
