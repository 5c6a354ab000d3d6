//! Redis-backed counter store.
//!
//! Uses the store's native `INCR`, which is atomic across all clients and
//! treats a missing key as 0. A read-modify-write sequence would race and is
//! never used here.

use std::time::Duration;

use async_trait::async_trait;
use hitcount_core::{CounterStore, HitCountError, Result};
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tokio::sync::RwLock;

/// Deadline for a single store round trip (connect or command). Keeps a
/// request from hanging forever when the store is unreachable.
const STORE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct RedisCounterStore {
    client: Client,
    conn: RwLock<Option<ConnectionManager>>,
}

impl RedisCounterStore {
    /// Validate the URL without connecting. The connection is established on
    /// first use, so a store that is down at boot only fails requests, not
    /// the process.
    pub fn open(url: &str) -> Result<Self> {
        let client = Client::open(url)
            .map_err(|e| HitCountError::Config(format!("invalid store url: {e}")))?;
        Ok(Self {
            client,
            conn: RwLock::new(None),
        })
    }

    /// Shared multiplexed connection. The manager reconnects on its own once
    /// established. Until one is published, each request runs its own connect
    /// attempt outside the lock, so failing attempts proceed concurrently
    /// instead of queueing behind one another; the first success wins the
    /// slot and everyone after reuses it.
    async fn connection(&self) -> Result<ConnectionManager> {
        if let Some(conn) = self.conn.read().await.as_ref() {
            return Ok(conn.clone());
        }

        let conn = match tokio::time::timeout(
            STORE_TIMEOUT,
            ConnectionManager::new(self.client.clone()),
        )
        .await
        {
            Ok(res) => res.map_err(from_redis_err)?,
            Err(_) => return Err(HitCountError::Timeout),
        };

        let mut slot = self.conn.write().await;
        Ok(slot.get_or_insert(conn).clone())
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment(&self, key: &str) -> Result<u64> {
        let mut conn = self.connection().await?;
        match tokio::time::timeout(STORE_TIMEOUT, conn.incr::<_, _, u64>(key, 1u64)).await {
            Ok(Ok(count)) => Ok(count),
            Ok(Err(e)) => Err(from_redis_err(e)),
            Err(_) => Err(HitCountError::Timeout),
        }
    }
}

fn from_redis_err(e: redis::RedisError) -> HitCountError {
    if e.is_timeout() {
        HitCountError::Timeout
    } else if e.is_connection_refusal() || e.is_connection_dropped() || e.is_io_error() {
        HitCountError::StoreUnavailable(e.to_string())
    } else {
        // Protocol-level failures, including WRONGTYPE when the key holds a
        // non-integer value and replies that fail to parse as an integer.
        HitCountError::BadReply(e.to_string())
    }
}
