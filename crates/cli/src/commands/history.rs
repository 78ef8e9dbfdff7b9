// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use doq_core::HistoryEntry;

use crate::error::Result;

use super::open_engine;

pub fn run(limit: usize) -> Result<()> {
    let (engine, _, _) = open_engine()?;
    let entries = engine.history().recent(limit)?;

    if entries.is_empty() {
        println!("No sync history.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

pub(crate) fn format_entry(entry: &HistoryEntry) -> String {
    let mut line = format!(
        "{}  {:<11} {:<7} {} processed, {} failed",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        entry.operation,
        entry.status,
        entry.items_processed,
        entry.items_failed
    );
    if let Some(retrying) = entry.items_retrying {
        if retrying > 0 {
            line.push_str(&format!(", {} retrying", retrying));
        }
    }
    if let Some(permanent) = entry.permanent_failures {
        if permanent > 0 {
            line.push_str(&format!(", {} permanent", permanent));
        }
    }
    if let Some(duration) = entry.duration {
        line.push_str(&format!(" ({}ms)", duration));
    }
    line
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
