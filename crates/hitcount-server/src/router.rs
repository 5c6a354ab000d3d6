//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, hits, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hits::hits))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
