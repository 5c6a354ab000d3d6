//! HTTP mapping of the shared error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hitcount_core::HitCountError;
use serde_json::json;
use thiserror::Error;

/// Handler-level error: a `HitCountError` rendered as an HTTP response.
///
/// Every store failure maps to a 5xx; a failed increment must never surface
/// as a success with a fabricated count.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub HitCountError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            HitCountError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HitCountError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            HitCountError::Config(_)
            | HitCountError::BadReply(_)
            | HitCountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
