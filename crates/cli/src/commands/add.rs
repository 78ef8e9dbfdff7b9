// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use doq_core::{
    EntityKind, Operation, QueueItem, Storage, SyncEngine, Transport,
};

use crate::error::{Error, Result};

use super::open_engine;

pub fn run(operation: &str, entity_type: &str, entity_id: &str, data: Option<String>) -> Result<()> {
    let operation: Operation = operation.parse()?;
    let entity_type: EntityKind = entity_type.parse()?;
    let data = parse_data(data.as_deref())?;

    let (mut engine, _, _) = open_engine()?;
    let item = run_impl(&mut engine, operation, entity_type, entity_id, data)?;

    println!(
        "Queued {} {} for {} ({})",
        item.operation, item.entity_type, item.entity_id, item.id
    );
    Ok(())
}

pub(crate) fn run_impl<S: Storage, T: Transport>(
    engine: &mut SyncEngine<S, T>,
    operation: Operation,
    entity_type: EntityKind,
    entity_id: &str,
    data: serde_json::Map<String, serde_json::Value>,
) -> Result<QueueItem> {
    Ok(engine
        .queue_mut()
        .enqueue(operation, entity_type, entity_id, data)?)
}

/// Parse `--data` into the queue's payload map. Absent means an empty
/// payload (delete mutations carry none).
pub(crate) fn parse_data(
    data: Option<&str>,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    match data {
        None => Ok(serde_json::Map::new()),
        Some(raw) => match serde_json::from_str::<serde_json::Value>(raw)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(Error::DataNotObject),
        },
    }
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
