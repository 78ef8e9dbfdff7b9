// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use doq_core::SyncStats;

use crate::error::Result;

use super::open_engine;

pub fn run() -> Result<()> {
    let (engine, _, _) = open_engine()?;
    let stats = engine.history().stats()?;
    println!("{}", render(&stats));
    Ok(())
}

pub(crate) fn render(stats: &SyncStats) -> String {
    let last = match stats.last_sync_time {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "never".to_string(),
    };

    format!(
        "Total syncs: {}\nSuccessful: {}\nFailed: {}\nSuccess rate: {:.1}%\nAverage duration: {:.0}ms\nLast sync: {}",
        stats.total_syncs,
        stats.successful_syncs,
        stats.failed_syncs,
        stats.success_rate,
        stats.average_duration,
        last
    )
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
