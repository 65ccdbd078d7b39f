//! The single outbound call every forwarding route makes.
//!
//! One GET per request, bounded by a fixed timeout. The client is built
//! fresh for each call and dropped with the request; connection pooling is
//! a deliberate non-feature of these demo services.

use std::time::Duration;

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::UpstreamError;

/// Bound on how long one outbound call may block its request.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Success envelope exchanged between services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// Scheme a service uses for its outbound hops. In-mesh services speak
/// plain HTTP and let the sidecar handle transport security; the
/// standalone client speaks HTTPS directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamScheme {
    Http,
    Https,
}

impl UpstreamScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            UpstreamScheme::Http => "http",
            UpstreamScheme::Https => "https",
        }
    }
}

/// Build the URL for a hop to `host` (which may carry a port).
pub fn upstream_url(
    scheme: UpstreamScheme,
    host: &str,
    path: &str,
) -> Result<Url, UpstreamError> {
    Url::parse(&format!("{}://{}{}", scheme.as_str(), host, path)).map_err(|e| {
        UpstreamError::Internal {
            reason: format!("invalid upstream URL for {host}: {e}"),
        }
    })
}

/// Issue one GET to `url` with the given headers and extract the
/// upstream's greeting message.
pub async fn fetch_greeting(url: Url, headers: HeaderMap) -> Result<String, UpstreamError> {
    let host = url.authority().to_string();

    let client = reqwest::Client::builder()
        .timeout(CALL_TIMEOUT)
        .build()
        .map_err(|e| UpstreamError::Internal {
            reason: e.to_string(),
        })?;

    let response = client
        .get(url)
        .headers(headers)
        .send()
        .await
        .map_err(|e| UpstreamError::Unreachable {
            host: host.clone(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamError::ErrorStatus {
            host,
            status: status.as_u16(),
            body,
        });
    }

    let greeting: Greeting = response.json().await.map_err(|e| UpstreamError::Internal {
        reason: format!("invalid upstream response: {e}"),
    })?;

    Ok(greeting.message)
}
