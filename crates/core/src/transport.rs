// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the network boundary.
//!
//! The sync engine only ever talks to a [`Transport`]; the bundled
//! [`StubTransport`] simulates latency and transient failures for local
//! development and tests, and a production build substitutes a real
//! HTTP/RPC implementation without touching the engine.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

use crate::model::QueueItem;

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The remote endpoint rejected or dropped the request; retryable.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// Cloud sync is switched off; no network I/O was attempted.
    #[error("cloud sync is disabled")]
    Disabled,
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport trait for delivering queue items to the remote endpoint.
///
/// A successful future resolution means the remote confirmed the mutation.
/// Timeouts are the transport's responsibility, not the engine's.
pub trait Transport: Send + Sync {
    /// Deliver one item to the remote endpoint.
    fn send(
        &self,
        item: &QueueItem,
    ) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>>;
}

/// Simulated transport with configurable latency and failure injection.
pub struct StubTransport {
    /// When false, every send reports failure without any simulated I/O.
    cloud_enabled: bool,
    /// Base simulated round-trip latency.
    latency_ms: u64,
    /// Probability in [0, 1] that a send fails with a transient error.
    failure_rate: f64,
    calls: AtomicUsize,
}

impl StubTransport {
    /// Create a stub with the original client's defaults: ~100-300ms latency
    /// and a 10% transient failure rate.
    pub fn new(cloud_enabled: bool) -> Self {
        StubTransport {
            cloud_enabled,
            latency_ms: 100,
            failure_rate: 0.1,
            calls: AtomicUsize::new(0),
        }
    }

    /// Override the simulated latency (0 disables the sleep entirely).
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Override the injected failure probability. 0.0 always succeeds,
    /// 1.0 always fails.
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }

    /// Number of sends that reached the (simulated) network.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for StubTransport {
    fn send(
        &self,
        item: &QueueItem,
    ) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>> {
        let item_id = item.id.clone();
        Box::pin(async move {
            if !self.cloud_enabled {
                return Err(TransportError::Disabled);
            }

            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.latency_ms > 0 {
                let jitter = rand::thread_rng().gen_range(0..=self.latency_ms * 2);
                tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms + jitter))
                    .await;
            }

            if rand::thread_rng().gen::<f64>() < self.failure_rate {
                tracing::debug!(id = %item_id, "injected transport failure");
                return Err(TransportError::SendFailed(
                    "network error: connection timeout".to_string(),
                ));
            }

            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
