// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod clear;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod offline;
pub mod stats;
pub mod status;
pub mod sync;

use std::path::PathBuf;

use doq_core::{HistoryLog, QueueStore, SqliteStorage, StubTransport, SyncEngine};

use crate::config::{find_doq_dir, get_db_path, Config};
use crate::error::Result;

/// Engine type every command operates on.
pub type CliEngine = SyncEngine<SqliteStorage, StubTransport>;

/// Helper to open the sync engine from the current context.
///
/// Queue and history each get their own connection to the same database
/// file; SQLite serializes the writes.
pub fn open_engine() -> Result<(CliEngine, Config, PathBuf)> {
    let doq_dir = find_doq_dir()?;
    let config = Config::load(&doq_dir)?;
    let db_path = get_db_path(&doq_dir);
    tracing::debug!(path = %db_path.display(), "opening sync database");

    let queue = QueueStore::new(SqliteStorage::open(&db_path)?);
    let history = HistoryLog::new(SqliteStorage::open(&db_path)?);
    let transport = StubTransport::new(config.cloud.enabled)
        .with_latency_ms(config.cloud.latency_ms)
        .with_failure_rate(config.cloud.failure_rate);

    Ok((SyncEngine::new(queue, history, transport), config, doq_dir))
}

/// Open just the key/value store, for commands that bypass the engine.
pub fn open_storage() -> Result<(SqliteStorage, PathBuf)> {
    let doq_dir = find_doq_dir()?;
    let storage = SqliteStorage::open(&get_db_path(&doq_dir))?;
    Ok((storage, doq_dir))
}
