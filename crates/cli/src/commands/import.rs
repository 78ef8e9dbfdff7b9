// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use doq_core::{import_snapshot, Snapshot};

use crate::error::Result;

/// Validates a snapshot file and reports its contents. Local state is
/// never overwritten; the command exists so an exported snapshot can be
/// checked before it is handed to another device.
pub fn run(filepath: &str) -> Result<()> {
    let snapshot = run_impl(Path::new(filepath))?;

    println!(
        "Valid snapshot (version {}) exported {}",
        snapshot.version,
        snapshot.export_date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  {} queue item(s), {} history entries",
        snapshot.queue.len(),
        snapshot.history.len()
    );
    Ok(())
}

pub(crate) fn run_impl(filepath: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(filepath)?;
    Ok(import_snapshot(&content)?)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
