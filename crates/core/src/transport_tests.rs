// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the transport stub.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::test_helpers::make_item;

#[tokio::test]
async fn test_disabled_transport_fails_without_io() {
    let transport = StubTransport::new(false).with_latency_ms(0);
    let item = make_item("q-1");

    let result = transport.send(&item).await;
    assert!(matches!(result, Err(TransportError::Disabled)));
    // The simulated network was never touched.
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_zero_failure_rate_always_succeeds() {
    let transport = StubTransport::new(true)
        .with_latency_ms(0)
        .with_failure_rate(0.0);
    let item = make_item("q-1");

    for _ in 0..20 {
        transport.send(&item).await.unwrap();
    }
    assert_eq!(transport.call_count(), 20);
}

#[tokio::test]
async fn test_full_failure_rate_always_fails() {
    let transport = StubTransport::new(true)
        .with_latency_ms(0)
        .with_failure_rate(1.0);
    let item = make_item("q-1");

    for _ in 0..20 {
        let result = transport.send(&item).await;
        assert!(matches!(result, Err(TransportError::SendFailed(_))));
    }
    assert_eq!(transport.call_count(), 20);
}

#[tokio::test]
async fn test_latency_is_applied() {
    let transport = StubTransport::new(true)
        .with_latency_ms(10)
        .with_failure_rate(0.0);
    let item = make_item("q-1");

    let start = std::time::Instant::now();
    transport.send(&item).await.unwrap();
    assert!(start.elapsed() >= std::time::Duration::from_millis(10));
}
