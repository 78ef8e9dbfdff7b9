// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key/value persistence layer.
//!
//! The queue and the history log both persist their full collection as a
//! JSON blob under a fixed key. The [`Storage`] trait keeps that contract
//! narrow so tests (and callers that want no disk at all) can inject
//! [`MemoryStorage`] in place of the SQLite-backed default.

use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Key the serialized queue collection is stored under.
pub const SYNC_QUEUE_KEY: &str = "sync-queue-v1";
/// Key the serialized history log is stored under.
pub const SYNC_HISTORY_KEY: &str = "sync-history-v1";
/// Key the offline-mode flag is stored under.
pub const OFFLINE_MODE_KEY: &str = "offline-mode";

/// SQL schema for the key/value store.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Narrow read/write contract over the local persistence layer.
///
/// Every `put` must be durable before it returns; the stores above this
/// layer rely on that for their read-modify-write atomicity.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. No-op if absent.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// SQLite-backed key/value storage.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open or create the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStorage { conn })
    }

    /// Open an in-process store backed by a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStorage { conn })
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// HashMap-backed storage for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
