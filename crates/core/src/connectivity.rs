// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connectivity signal: online/offline transitions and the auto-sync trigger.
//!
//! A transition to online is the sole automatic trigger for a sync run;
//! manual "sync now" calls the same engine entrypoint directly. There is no
//! periodic polling beyond what a caller chooses to schedule.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::engine::SyncEngine;
use crate::error::{Error, Result};
use crate::model::RunKind;
use crate::storage::{Storage, OFFLINE_MODE_KEY};
use crate::transport::Transport;

/// Publisher for the online/offline state.
pub struct ConnectivityMonitor {
    tx: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    /// Create a monitor with the given initial state.
    pub fn new(initially_online: bool) -> Self {
        let (tx, _) = watch::channel(initially_online);
        ConnectivityMonitor { tx }
    }

    /// Publish a state change. Subscribers only wake on actual transitions.
    pub fn set_online(&self, online: bool) {
        self.tx.send_if_modified(|state| {
            if *state == online {
                false
            } else {
                *state = online;
                true
            }
        });
    }

    /// Current state.
    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe to transitions.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        ConnectivityMonitor::new(true)
    }
}

/// Spawn the auto-sync driver: on each offline-to-online transition, run one
/// sync if cloud sync is enabled and at least one pending item exists.
///
/// The task ends when the monitor (all senders) is dropped.
pub fn spawn_auto_sync<S, T>(
    mut rx: watch::Receiver<bool>,
    engine: Arc<Mutex<SyncEngine<S, T>>>,
    cloud_enabled: bool,
) -> JoinHandle<()>
where
    S: Storage + Send + 'static,
    T: Transport + 'static,
{
    tokio::spawn(async move {
        let mut was_online = *rx.borrow();

        while rx.changed().await.is_ok() {
            let online = *rx.borrow();
            let reconnected = online && !was_online;
            was_online = online;

            if !reconnected || !cloud_enabled {
                continue;
            }

            let mut engine = engine.lock().await;
            let pending = match engine.queue().count_pending() {
                Ok(n) => n,
                Err(e) => {
                    tracing::error!(error = %e, "cannot read queue on reconnect");
                    continue;
                }
            };
            if pending == 0 {
                continue;
            }

            tracing::info!(pending, "connectivity restored, starting auto sync");
            match engine.flush(RunKind::AutoSync).await {
                Ok(_) => {}
                // Another run won the race; it will drain the queue.
                Err(Error::SyncInProgress) => {}
                Err(e) => tracing::error!(error = %e, "auto sync failed"),
            }
        }
    })
}

/// Read the persisted offline-mode flag, if one was ever written.
pub fn offline_mode<S: Storage>(storage: &S) -> Result<Option<bool>> {
    let Some(raw) = storage.get(OFFLINE_MODE_KEY)? else {
        return Ok(None);
    };
    let flag = serde_json::from_str(&raw).map_err(|e| Error::CorruptedData {
        key: OFFLINE_MODE_KEY.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Some(flag))
}

/// Persist the offline-mode flag.
pub fn set_offline_mode<S: Storage>(storage: &mut S, enabled: bool) -> Result<()> {
    let json = serde_json::to_string(&enabled)?;
    storage.put(OFFLINE_MODE_KEY, &json)
}

#[cfg(test)]
#[path = "connectivity_tests.rs"]
mod tests;
