// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use doq_core::connectivity::set_offline_mode;

use crate::error::{Error, Result};

use super::open_storage;

pub fn run(mode: &str) -> Result<()> {
    let enabled = parse_mode(mode)?;

    let (mut storage, _) = open_storage()?;
    set_offline_mode(&mut storage, enabled)?;

    if enabled {
        println!("Offline mode on: auto-sync on reconnect is suppressed.");
    } else {
        println!("Offline mode off.");
    }
    Ok(())
}

pub(crate) fn parse_mode(s: &str) -> Result<bool> {
    match s {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(Error::InvalidOfflineMode(other.to_string())),
    }
}

#[cfg(test)]
#[path = "offline_tests.rs"]
mod tests;
