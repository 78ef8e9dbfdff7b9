// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync engine: drains the offline queue against the remote transport.
//!
//! One run walks the queue in insertion order, gates each item through the
//! backoff policy, awaits the transport for each eligible item, and writes
//! the outcome back before moving on. Items are never dispatched in
//! parallel; sequential awaits bound load on the remote endpoint and keep
//! per-item retry bookkeeping race-free without locks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use chrono::Utc;

use crate::backoff::should_attempt;
use crate::error::{Error, Result};
use crate::history::{HistoryLog, NewHistoryEntry};
use crate::model::{
    ItemStatus, QueueItemPatch, RunKind, RunStatus, RunSummary, MAX_RETRY_COUNT,
};
use crate::queue::QueueStore;
use crate::storage::Storage;
use crate::transport::Transport;

/// Sync engine over a queue store, a history log, and a transport.
pub struct SyncEngine<S: Storage, T: Transport> {
    queue: QueueStore<S>,
    history: HistoryLog<S>,
    transport: T,
    /// Run-in-progress flag. Both the connectivity signal and a manual
    /// "sync now" can race to start a run; the loser gets
    /// [`Error::SyncInProgress`] instead of a second concurrent drain.
    in_flight: AtomicBool,
}

impl<S: Storage, T: Transport> SyncEngine<S, T> {
    /// Create an engine over the given stores and transport.
    pub fn new(queue: QueueStore<S>, history: HistoryLog<S>, transport: T) -> Self {
        SyncEngine {
            queue,
            history,
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The underlying queue store.
    pub fn queue(&self) -> &QueueStore<S> {
        &self.queue
    }

    /// Mutable access to the queue store (enqueue paths).
    pub fn queue_mut(&mut self) -> &mut QueueStore<S> {
        &mut self.queue
    }

    /// The underlying history log.
    pub fn history(&self) -> &HistoryLog<S> {
        &self.history
    }

    /// Mutable access to the history log.
    pub fn history_mut(&mut self) -> &mut HistoryLog<S> {
        &mut self.history
    }

    /// The transport in use.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Drain the queue once: exactly one transport attempt per eligible
    /// item, strictly in insertion order. Per-item failures never abort the
    /// run. Appends a history entry for the run before returning.
    pub async fn flush(&mut self, kind: RunKind) -> Result<RunSummary> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(Error::SyncInProgress);
        }
        let result = self.flush_inner(kind).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn flush_inner(&mut self, kind: RunKind) -> Result<RunSummary> {
        let started = Instant::now();
        let mut summary = RunSummary::default();

        for item in self.queue.list()? {
            if item.status == ItemStatus::Synced {
                // Terminal; excluded from all future processing.
                continue;
            }

            let now = Utc::now();
            if !should_attempt(&item, now) {
                if item.retry_count >= MAX_RETRY_COUNT {
                    summary.permanent_failures += 1;
                } else if item.retry_count > 0 {
                    // Still inside its backoff window.
                    summary.retrying += 1;
                }
                continue;
            }

            let retry_count = item.retry_count + 1;

            match self.transport.send(&item).await {
                Ok(()) => {
                    self.queue.update(
                        &item.id,
                        &QueueItemPatch {
                            status: Some(ItemStatus::Synced),
                            retry_count: Some(retry_count),
                            last_attempt_timestamp: Some(now),
                            error: None,
                        },
                    )?;
                    summary.processed += 1;
                }
                Err(e) => {
                    let permanent = retry_count >= MAX_RETRY_COUNT;
                    self.queue.update(
                        &item.id,
                        &QueueItemPatch {
                            status: Some(if permanent {
                                ItemStatus::Failed
                            } else {
                                ItemStatus::Pending
                            }),
                            retry_count: Some(retry_count),
                            last_attempt_timestamp: Some(now),
                            error: Some(e.to_string()),
                        },
                    )?;
                    if permanent {
                        tracing::warn!(id = %item.id, error = %e, "item exhausted its retry budget");
                        summary.permanent_failures += 1;
                    } else {
                        tracing::debug!(
                            id = %item.id,
                            attempt = retry_count,
                            error = %e,
                            "transient sync failure, will retry"
                        );
                        summary.retrying += 1;
                    }
                    summary.failed += 1;
                }
            }
        }

        let duration_ms = started.elapsed().as_millis() as u64;
        self.history.append(NewHistoryEntry {
            operation: kind,
            status: summary.status(),
            items_processed: summary.processed,
            items_failed: summary.failed,
            items_retrying: Some(summary.retrying),
            permanent_failures: Some(summary.permanent_failures),
            duration: Some(duration_ms),
            error_message: None,
        })?;

        tracing::info!(
            kind = %kind,
            processed = summary.processed,
            failed = summary.failed,
            retrying = summary.retrying,
            permanent = summary.permanent_failures,
            duration_ms,
            "sync run complete"
        );

        Ok(summary)
    }

    #[cfg(test)]
    pub(crate) fn mark_run_in_progress(&self) {
        self.in_flight.store(true, Ordering::SeqCst);
    }

    /// Remove all queue items and record the clear in the history log.
    pub fn clear_queue(&mut self) -> Result<usize> {
        let removed = self.queue.clear()?;
        self.history.append(NewHistoryEntry {
            operation: RunKind::ClearQueue,
            status: RunStatus::Success,
            items_processed: removed as u32,
            items_failed: 0,
            items_retrying: None,
            permanent_failures: None,
            duration: None,
            error_message: None,
        })?;
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
