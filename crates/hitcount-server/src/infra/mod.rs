//! Store adapters backing the `CounterStore` seam.

pub mod redis_store;

pub use redis_store::RedisCounterStore;
