//! hitcount core: the counter store contract and shared error surface.
//!
//! This crate defines the `CounterStore` seam and the error types shared by
//! the server and its store adapters. It intentionally carries no transport
//! or runtime dependencies so adapters and tests can reuse it freely.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `HitCountError`/`Result` so the serving
//! process does not crash on a misbehaving store.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;

pub use error::{HitCountError, Result};
pub use store::{CounterStore, InMemoryCounterStore};
