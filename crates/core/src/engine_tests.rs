// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the sync engine.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::history::MAX_HISTORY_ENTRIES;
use crate::model::EntityKind;
use crate::storage::MemoryStorage;
use crate::test_helpers::{data_with, millis_ago, MockTransport};
use crate::transport::TransportError;

fn make_engine(transport: MockTransport) -> SyncEngine<MemoryStorage, MockTransport> {
    SyncEngine::new(
        QueueStore::new(MemoryStorage::new()),
        HistoryLog::new(MemoryStorage::new()),
        transport,
    )
}

fn enqueue_tasks(engine: &mut SyncEngine<MemoryStorage, MockTransport>, n: usize) {
    for i in 0..n {
        engine
            .queue_mut()
            .enqueue_create(
                EntityKind::Task,
                &format!("task-{}", i),
                data_with("title", "t"),
            )
            .unwrap();
    }
}

/// Rewind an item's last attempt so the backoff gate opens immediately.
fn age_past_backoff(engine: &mut SyncEngine<MemoryStorage, MockTransport>, id: &str) {
    engine
        .queue_mut()
        .update(
            id,
            &QueueItemPatch {
                last_attempt_timestamp: Some(millis_ago(120_000)),
                ..QueueItemPatch::default()
            },
        )
        .unwrap();
}

#[tokio::test]
async fn test_flush_all_succeed() {
    let mut engine = make_engine(MockTransport::always_ok());
    enqueue_tasks(&mut engine, 3);
    assert_eq!(engine.queue().count_pending().unwrap(), 3);

    let summary = engine.flush(RunKind::ManualSync).await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            processed: 3,
            failed: 0,
            retrying: 0,
            permanent_failures: 0
        }
    );
    assert_eq!(engine.queue().count_pending().unwrap(), 0);
    // Items persist with synced status for audit; nothing was deleted.
    assert_eq!(engine.queue().list().unwrap().len(), 3);
}

#[tokio::test]
async fn test_empty_queue_run_is_success() {
    let mut engine = make_engine(MockTransport::always_ok());

    let summary = engine.flush(RunKind::ManualSync).await.unwrap();
    assert_eq!(summary, RunSummary::default());

    let entry = &engine.history().recent(1).unwrap()[0];
    assert_eq!(entry.status, RunStatus::Success);
}

#[tokio::test]
async fn test_transient_failure_requeues_as_pending() {
    let mut engine = make_engine(MockTransport::always_failing());
    enqueue_tasks(&mut engine, 1);

    let summary = engine.flush(RunKind::ManualSync).await.unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.retrying, 1);
    assert_eq!(summary.permanent_failures, 0);

    let item = &engine.queue().list().unwrap()[0];
    assert_eq!(item.status, ItemStatus::Pending);
    assert_eq!(item.retry_count, 1);
    assert!(item.last_attempt_timestamp.is_some());
    assert!(item.error.is_some());
}

#[tokio::test]
async fn test_item_exhausts_retry_budget_then_never_retried() {
    let mut engine = make_engine(MockTransport::always_failing());
    enqueue_tasks(&mut engine, 1);
    let id = engine.queue().list().unwrap()[0].id.clone();

    // Five runs, each spaced past the backoff window.
    for attempt in 1..=MAX_RETRY_COUNT {
        let summary = engine.flush(RunKind::ManualSync).await.unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(engine.queue().list().unwrap()[0].retry_count, attempt);
        age_past_backoff(&mut engine, &id);
    }

    let item = &engine.queue().list().unwrap()[0];
    assert_eq!(item.retry_count, MAX_RETRY_COUNT);
    assert_eq!(item.status, ItemStatus::Failed);
    assert_eq!(engine.queue().count_failed().unwrap(), 1);
    assert_eq!(engine.transport().call_count(), MAX_RETRY_COUNT as usize);

    // A sixth run classifies it as permanently failed without touching
    // the transport.
    let summary = engine.flush(RunKind::ManualSync).await.unwrap();
    assert_eq!(summary.permanent_failures, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(engine.transport().call_count(), MAX_RETRY_COUNT as usize);
}

#[tokio::test]
async fn test_fail_once_then_succeed() {
    let mut engine = make_engine(MockTransport::with_script(vec![Err(
        TransportError::SendFailed("network error: connection timeout".to_string()),
    )]));
    enqueue_tasks(&mut engine, 1);
    let id = engine.queue().list().unwrap()[0].id.clone();

    engine.flush(RunKind::ManualSync).await.unwrap();
    {
        let item = &engine.queue().list().unwrap()[0];
        assert_eq!(item.retry_count, 1);
        assert_eq!(item.status, ItemStatus::Pending);
    }

    age_past_backoff(&mut engine, &id);

    let summary = engine.flush(RunKind::Retry).await.unwrap();
    assert_eq!(summary.processed, 1);

    let item = &engine.queue().list().unwrap()[0];
    assert_eq!(item.status, ItemStatus::Synced);
    assert_eq!(item.retry_count, 2);
    assert_eq!(engine.transport().call_count(), 2);
}

#[tokio::test]
async fn test_one_failing_item_does_not_block_later_items() {
    let mut engine = make_engine(MockTransport::with_script(vec![
        Err(TransportError::SendFailed("boom".to_string())),
        Ok(()),
        Ok(()),
    ]));
    enqueue_tasks(&mut engine, 3);

    let summary = engine.flush(RunKind::ManualSync).await.unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.retrying, 1);
    assert_eq!(engine.transport().call_count(), 3);

    let items = engine.queue().list().unwrap();
    assert_eq!(items[0].status, ItemStatus::Pending);
    assert_eq!(items[1].status, ItemStatus::Synced);
    assert_eq!(items[2].status, ItemStatus::Synced);
}

#[tokio::test]
async fn test_synced_items_are_never_reprocessed() {
    let mut engine = make_engine(MockTransport::always_ok());
    enqueue_tasks(&mut engine, 1);

    engine.flush(RunKind::ManualSync).await.unwrap();
    let after_first = engine.queue().list().unwrap()[0].clone();
    assert_eq!(after_first.status, ItemStatus::Synced);

    // Later runs leave the synced item untouched and uncounted.
    let summary = engine.flush(RunKind::ManualSync).await.unwrap();
    assert_eq!(summary, RunSummary::default());
    assert_eq!(engine.transport().call_count(), 1);

    let after_second = engine.queue().list().unwrap()[0].clone();
    assert_eq!(after_second.retry_count, after_first.retry_count);
    assert_eq!(
        after_second.last_attempt_timestamp,
        after_first.last_attempt_timestamp
    );
}

#[tokio::test]
async fn test_items_inside_backoff_window_are_skipped() {
    let mut engine = make_engine(MockTransport::always_failing());
    enqueue_tasks(&mut engine, 1);

    engine.flush(RunKind::ManualSync).await.unwrap();
    // Immediately re-run: the item was just attempted, so the gate blocks.
    let summary = engine.flush(RunKind::ManualSync).await.unwrap();

    assert_eq!(summary.retrying, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(engine.transport().call_count(), 1);
    // Skipping has no side effects on the record.
    assert_eq!(engine.queue().list().unwrap()[0].retry_count, 1);
}

#[tokio::test]
async fn test_retry_count_is_monotonic_across_runs() {
    let mut engine = make_engine(MockTransport::always_failing());
    enqueue_tasks(&mut engine, 1);
    let id = engine.queue().list().unwrap()[0].id.clone();

    let mut last = 0;
    for _ in 0..8 {
        engine.flush(RunKind::ManualSync).await.unwrap();
        let retry_count = engine.queue().list().unwrap()[0].retry_count;
        assert!(retry_count >= last);
        last = retry_count;
        age_past_backoff(&mut engine, &id);
    }
    assert_eq!(last, MAX_RETRY_COUNT);
}

#[tokio::test]
async fn test_flush_appends_history_entry() {
    let mut engine = make_engine(MockTransport::with_script(vec![
        Ok(()),
        Err(TransportError::SendFailed("boom".to_string())),
    ]));
    enqueue_tasks(&mut engine, 2);

    engine.flush(RunKind::AutoSync).await.unwrap();

    let recent = engine.history().recent(10).unwrap();
    assert_eq!(recent.len(), 1);
    let entry = &recent[0];
    assert_eq!(entry.operation, RunKind::AutoSync);
    assert_eq!(entry.status, RunStatus::Partial);
    assert_eq!(entry.items_processed, 1);
    assert_eq!(entry.items_failed, 1);
    assert_eq!(entry.items_retrying, Some(1));
    assert_eq!(entry.permanent_failures, Some(0));
    assert!(entry.duration.is_some());
}

#[tokio::test]
async fn test_history_stays_bounded_across_many_runs() {
    let mut engine = make_engine(MockTransport::always_ok());

    for _ in 0..(MAX_HISTORY_ENTRIES + 5) {
        engine.flush(RunKind::ManualSync).await.unwrap();
    }

    let all = engine.history().recent(usize::MAX).unwrap();
    assert_eq!(all.len(), MAX_HISTORY_ENTRIES);
}

#[tokio::test]
async fn test_second_flush_rejected_while_run_in_progress() {
    let mut engine = make_engine(MockTransport::always_ok());
    enqueue_tasks(&mut engine, 1);

    engine.mark_run_in_progress();
    let result = engine.flush(RunKind::ManualSync).await;
    assert!(matches!(result, Err(Error::SyncInProgress)));
    // The guarded run never touched the queue or the transport.
    assert_eq!(engine.queue().count_pending().unwrap(), 1);
    assert_eq!(engine.transport().call_count(), 0);
}

#[tokio::test]
async fn test_clear_queue_records_history() {
    let mut engine = make_engine(MockTransport::always_ok());
    enqueue_tasks(&mut engine, 2);

    let removed = engine.clear_queue().unwrap();
    assert_eq!(removed, 2);
    assert!(engine.queue().list().unwrap().is_empty());

    let entry = &engine.history().recent(1).unwrap()[0];
    assert_eq!(entry.operation, RunKind::ClearQueue);
    assert_eq!(entry.status, RunStatus::Success);
    assert_eq!(entry.items_processed, 2);
}
