// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use doq_core::{RunKind, RunSummary};

use crate::error::Result;

use super::open_engine;

pub fn run() -> Result<()> {
    let (mut engine, config, _) = open_engine()?;

    if !config.cloud.enabled {
        println!("Note: cloud sync is disabled; attempts will be recorded as failures.");
    }

    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(engine.flush(RunKind::ManualSync))?;

    println!("{}", format_summary(&summary));
    Ok(())
}

pub(crate) fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Sync {}: {} synced, {} failed, {} retrying, {} permanently failed",
        summary.status(),
        summary.processed,
        summary.failed,
        summary.retrying,
        summary.permanent_failures
    )
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
