//! hitcount server library entry.
//!
//! This crate wires the configuration, shared state, HTTP surface, and the
//! Redis-backed counter store into a cohesive service. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod hits;
pub mod infra;
pub mod ops;
pub mod router;
