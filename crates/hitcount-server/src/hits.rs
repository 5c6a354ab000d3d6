//! The counter endpoint.

use axum::extract::State;

use crate::{app_state::AppState, config, error::ApiError};

/// `GET /` — atomically increment the shared counter and report the new
/// value. The store handles the increment; no handler-side locking.
pub async fn hits(State(state): State<AppState>) -> Result<String, ApiError> {
    let count = match state.store().increment(config::COUNTER_KEY).await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(error = %e, "counter increment failed");
            return Err(e.into());
        }
    };

    tracing::debug!(count, "served counter");
    Ok(format!("Hello! This page has been viewed {count} times."))
}
