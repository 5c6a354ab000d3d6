//! Shared error type across hitcount crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid configuration value.
    Config,
    /// Store unreachable (refused connection, dropped link, IO failure).
    StoreUnavailable,
    /// Store round trip exceeded its deadline.
    Timeout,
    /// Store answered, but not with a usable integer.
    BadReply,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::Timeout => "TIMEOUT",
            ClientCode::BadReply => "BAD_REPLY",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HitCountError>;

/// Unified error type used by core, the server, and store adapters.
#[derive(Debug, Error)]
pub enum HitCountError {
    #[error("bad configuration: {0}")]
    Config(String),
    #[error("counter store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("counter store timed out")]
    Timeout,
    #[error("unexpected store reply: {0}")]
    BadReply(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HitCountError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HitCountError::Config(_) => ClientCode::Config,
            HitCountError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            HitCountError::Timeout => ClientCode::Timeout,
            HitCountError::BadReply(_) => ClientCode::BadReply,
            HitCountError::Internal(_) => ClientCode::Internal,
        }
    }
}
