// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use doq_core::{connectivity::offline_mode, Storage, SyncEngine, Transport};

use crate::error::Result;

use super::{open_engine, open_storage};

pub fn run() -> Result<()> {
    let (engine, config, _) = open_engine()?;
    let (flag_storage, _) = open_storage()?;

    let report = gather(&engine, &flag_storage, config.cloud.enabled)?;
    println!("{}", render(&report));
    Ok(())
}

pub(crate) struct StatusReport {
    pub cloud_enabled: bool,
    pub offline: bool,
    pub pending: usize,
    pub retrying: usize,
    pub failed: usize,
    pub last_successful: Option<DateTime<Utc>>,
}

pub(crate) fn gather<S: Storage, T: Transport>(
    engine: &SyncEngine<S, T>,
    flag_storage: &impl Storage,
    cloud_enabled: bool,
) -> Result<StatusReport> {
    Ok(StatusReport {
        cloud_enabled,
        offline: offline_mode(flag_storage)?.unwrap_or(false),
        pending: engine.queue().count_pending()?,
        retrying: engine.queue().count_retrying()?,
        failed: engine.queue().count_failed()?,
        last_successful: engine
            .history()
            .last_successful()?
            .map(|entry| entry.timestamp),
    })
}

pub(crate) fn render(report: &StatusReport) -> String {
    let cloud = if report.cloud_enabled {
        "enabled"
    } else {
        "disabled"
    };
    let mode = if report.offline { "offline" } else { "online" };
    let last = match report.last_successful {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "never".to_string(),
    };

    format!(
        "Cloud sync: {}\nMode: {}\nQueue: {} pending, {} retrying, {} permanently failed\nLast successful sync: {}",
        cloud, mode, report.pending, report.retrying, report.failed, last
    )
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
