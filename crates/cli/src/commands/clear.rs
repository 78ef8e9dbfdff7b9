// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::Result;

use super::open_engine;

pub fn run() -> Result<()> {
    let (mut engine, _, _) = open_engine()?;
    let removed = engine.clear_queue()?;
    println!("Removed {} queued item(s)", removed);
    Ok(())
}
