//! Identity-token fetch for calls that leave the mesh.
//!
//! Tokens come from the GCE metadata server, fetched fresh per outbound
//! call with the target URL as the audience. The metadata host can be
//! overridden (`GCE_METADATA_HOST`) so tests can stand in a fixture.

use axum::http::HeaderValue;

use crate::error::UpstreamError;
use crate::upstream::CALL_TIMEOUT;

/// Metadata server host inside GCP.
pub const DEFAULT_METADATA_HOST: &str = "metadata.google.internal";

const IDENTITY_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/identity";

/// Fetch a fresh ID token for `audience` from the metadata server.
///
/// Failures here are internal errors, not upstream ones: the call to the
/// actual target never happened.
pub async fn fetch_id_token(
    metadata_host: &str,
    audience: &str,
) -> Result<String, UpstreamError> {
    let url = format!("http://{metadata_host}{IDENTITY_PATH}");

    let client = reqwest::Client::builder()
        .timeout(CALL_TIMEOUT)
        .build()
        .map_err(|e| UpstreamError::Internal {
            reason: e.to_string(),
        })?;

    let response = client
        .get(url)
        .query(&[("audience", audience)])
        .header("Metadata-Flavor", "Google")
        .send()
        .await
        .map_err(|e| UpstreamError::Internal {
            reason: format!("identity token fetch failed: {e}"),
        })?;

    if !response.status().is_success() {
        return Err(UpstreamError::Internal {
            reason: format!("identity token fetch returned {}", response.status()),
        });
    }

    response.text().await.map_err(|e| UpstreamError::Internal {
        reason: format!("identity token fetch failed: {e}"),
    })
}

/// Render a token as a bearer `Authorization` header value.
pub fn bearer(token: &str) -> Result<HeaderValue, UpstreamError> {
    HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| UpstreamError::Internal {
        reason: format!("token is not a valid header value: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_value() {
        let value = bearer("abc123").unwrap();
        assert_eq!(value, "Bearer abc123");
    }

    #[test]
    fn test_bearer_rejects_control_chars() {
        assert!(bearer("abc\ndef").is_err());
    }
}
