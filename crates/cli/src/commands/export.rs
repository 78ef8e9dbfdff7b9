// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use doq_core::{export_snapshot, Storage, SyncEngine, Transport};

use crate::error::Result;

use super::open_engine;

pub fn run(filepath: &str) -> Result<()> {
    let (engine, _, _) = open_engine()?;
    let (items, entries) = run_impl(&engine, Path::new(filepath))?;
    println!(
        "Exported {} queue item(s) and {} history entries to {}",
        items, entries, filepath
    );
    Ok(())
}

pub(crate) fn run_impl<S: Storage, T: Transport>(
    engine: &SyncEngine<S, T>,
    filepath: &Path,
) -> Result<(usize, usize)> {
    let json = export_snapshot(engine.queue(), engine.history())?;
    fs::write(filepath, json)?;

    let items = engine.queue().list()?.len();
    let entries = engine.history().all()?.len();
    Ok((items, entries))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
