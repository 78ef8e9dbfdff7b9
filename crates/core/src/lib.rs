// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! doq-core - offline sync queue and retry engine for a local-first to-do app.
//!
//! Local mutations made while disconnected are queued durably, replayed
//! against the remote endpoint once connectivity returns, and retried with
//! bounded exponential backoff on partial failure.
//!
//! # Main Components
//!
//! - [`QueueStore`] - durable, ordered storage of pending mutations
//! - [`backoff`] - retry delay policy and per-item attempt gate
//! - [`Transport`] - the network boundary ([`StubTransport`] simulates it)
//! - [`SyncEngine`] - drains the queue, one sequential attempt per item
//! - [`HistoryLog`] - bounded append-only record of sync runs
//! - [`ConnectivityMonitor`] - online/offline transitions and auto-sync
//!
//! # Control flow
//!
//! ```text
//! local mutation ──(offline)──► QueueStore
//!                                   │
//! connectivity restored ──► SyncEngine ──► Transport ──► remote
//!                                   │
//!                    outcomes ──► QueueStore + HistoryLog
//! ```

pub mod backoff;
pub mod connectivity;
pub mod engine;
pub mod error;
pub mod history;
mod id;
pub mod model;
pub mod queue;
pub mod snapshot;
pub mod storage;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use connectivity::ConnectivityMonitor;
pub use engine::SyncEngine;
pub use error::{Error, Result};
pub use history::{HistoryLog, NewHistoryEntry, SyncStats, MAX_HISTORY_ENTRIES};
pub use model::{
    EntityKind, HistoryEntry, ItemStatus, Operation, QueueItem, QueueItemPatch, RunKind,
    RunStatus, RunSummary, MAX_RETRY_COUNT,
};
pub use queue::QueueStore;
pub use snapshot::{export_snapshot, import_snapshot, Snapshot, SNAPSHOT_VERSION};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use transport::{StubTransport, Transport, TransportError, TransportResult};
