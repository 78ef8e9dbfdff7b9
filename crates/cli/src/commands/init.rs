// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use doq_core::SqliteStorage;

use crate::config::{get_db_path, init_doq_dir};
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let doq_dir = init_doq_dir(&target_path)?;

    // Create the database up front so the first enqueue never races
    // directory creation.
    SqliteStorage::open(&get_db_path(&doq_dir))?;

    println!("Initialized sync queue at {}", doq_dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
