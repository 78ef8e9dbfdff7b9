// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Retry delay policy: bounded exponential backoff with jitter.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;

use crate::model::{ItemStatus, QueueItem, MAX_RETRY_COUNT};

/// Delay before the first retry.
pub const BASE_BACKOFF_MS: u64 = 1000;
/// Ceiling on the nominal delay, before jitter.
pub const MAX_BACKOFF_MS: u64 = 60_000;

/// Compute the retry delay for the given attempt count.
///
/// `min(BASE * 2^retry_count, MAX)` with a uniform ±25% jitter so that many
/// clients recovering at once do not retry in lockstep.
pub fn backoff_delay(retry_count: u32) -> Duration {
    backoff_delay_with(retry_count, &mut rand::thread_rng())
}

/// [`backoff_delay`] over an injected RNG, for deterministic callers.
pub fn backoff_delay_with<R: Rng>(retry_count: u32, rng: &mut R) -> Duration {
    let exp = match 2u64.checked_pow(retry_count) {
        Some(mult) => BASE_BACKOFF_MS.saturating_mul(mult).min(MAX_BACKOFF_MS),
        None => MAX_BACKOFF_MS,
    };

    let jitter = exp as f64 * 0.25 * (rng.gen::<f64>() * 2.0 - 1.0);
    Duration::from_millis((exp as f64 + jitter).floor().max(0.0) as u64)
}

/// Whether the sync engine should attempt this item now.
///
/// Never true for synced items or items out of retry budget. Items that were
/// never attempted are always eligible; otherwise the item must be past its
/// backoff window.
pub fn should_attempt(item: &QueueItem, now: DateTime<Utc>) -> bool {
    if item.status == ItemStatus::Synced {
        return false;
    }
    if item.retry_count >= MAX_RETRY_COUNT {
        return false;
    }

    let Some(last_attempt) = item.last_attempt_timestamp else {
        return true;
    };

    let delay = backoff_delay(item.retry_count);
    let elapsed = now.signed_duration_since(last_attempt);

    elapsed.num_milliseconds() >= delay.as_millis() as i64
}

#[cfg(test)]
#[path = "backoff_tests.rs"]
mod tests;
