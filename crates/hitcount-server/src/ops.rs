//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness

use axum::{http::StatusCode, response::IntoResponse};

/// Liveness only; deliberately independent of store health so an unreachable
/// store does not flap the process.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
