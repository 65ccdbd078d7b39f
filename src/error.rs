//! Error taxonomy for outbound calls.
//!
//! Three buckets, uniformly applied by every forwarding route:
//! - upstream answered with an error status → 502 Bad Gateway, embedding
//!   the upstream status and body,
//! - upstream unreachable at the network level → 503 Service Unavailable,
//! - anything else (malformed body, token fetch failure) → 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while making the single outbound call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a 4xx/5xx status.
    #[error("Error response received from {host}.")]
    ErrorStatus {
        host: String,
        status: u16,
        body: String,
    },

    /// The upstream could not be reached (connect failure, DNS, timeout).
    #[error("Failed to call {host}. Reason: {reason}")]
    Unreachable { host: String, reason: String },

    /// Anything else.
    #[error("An unexpected internal error occurred. Reason: {reason}")]
    Internal { reason: String },
}

/// Body of a 502 response, embedding what the upstream said.
#[derive(Debug, Serialize)]
pub struct UpstreamFailure {
    pub message: String,
    pub target_status_code: u16,
    pub target_response: String,
}

/// Body of a 503/500 response.
#[derive(Debug, Serialize)]
pub struct Reason {
    pub message: String,
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            UpstreamError::ErrorStatus { status, body, .. } => (
                StatusCode::BAD_GATEWAY,
                Json(UpstreamFailure {
                    message,
                    target_status_code: status,
                    target_response: body,
                }),
            )
                .into_response(),
            UpstreamError::Unreachable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, Json(Reason { message })).into_response()
            }
            UpstreamError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(Reason { message })).into_response()
            }
        }
    }
}
