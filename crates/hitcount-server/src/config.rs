//! Service configuration (environment-driven).
//!
//! The only recognized knob is `REDIS_HOST`; everything else is fixed by the
//! service contract. An empty or bogus hostname is deliberately not validated
//! here: the first request's store failure surfaces it.

/// Fixed listen address for the HTTP surface.
pub const LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Well-known port of the counter store protocol.
pub const REDIS_PORT: u16 = 6379;

/// The single counter key this service mutates.
pub const COUNTER_KEY: &str = "hits";

const REDIS_HOST_VAR: &str = "REDIS_HOST";

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_host: default_redis_host(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let redis_host =
            std::env::var(REDIS_HOST_VAR).unwrap_or_else(|_| default_redis_host());
        Self { redis_host }
    }

    /// Connection URL of the counter store.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, REDIS_PORT)
    }
}

fn default_redis_host() -> String {
    "redis".into()
}
