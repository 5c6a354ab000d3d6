//! The counter store seam.
//!
//! A `CounterStore` owns exactly one operation: atomically increment a named
//! counter and return the post-increment value. Atomicity lives in the store
//! itself (Redis `INCR`, or an atomic in the in-memory variant), never in
//! handler-side coordination.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;

/// Atomic increment-and-return for named counters.
///
/// Implementations must guarantee that K concurrent increments of a fresh key
/// observe exactly the values `1..=K`, with no duplicates and no gaps, and
/// must treat a missing key as holding 0. A failed increment is reported as
/// an error, never as a fabricated or stale count.
#[async_trait]
pub trait CounterStore: Send + Sync {
    async fn increment(&self, key: &str) -> Result<u64>;
}

/// In-process counter store backed by a concurrent map of atomics.
///
/// Used by handler tests and for running the server without an external
/// store. Counts do not survive the process.
#[derive(Default)]
pub struct InMemoryCounterStore {
    counters: DashMap<String, AtomicU64>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn increment(&self, key: &str) -> Result<u64> {
        let counter = self
            .counters
            .entry(key.to_owned())
            .or_insert_with(|| AtomicU64::new(0));
        Ok(counter.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
