//! In-mesh client: single hop, chained hop through a proxy, and the DNS
//! diagnostic.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::UpstreamError;
use crate::trace::trace_headers;
use crate::upstream::{fetch_greeting, upstream_url, Greeting};

use super::{call_target, hello, resolve_ip, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/call/{target_hostname}", get(call_target))
        .route("/call/{proxy_hostname}/{target_hostname}", get(call_chain))
        .route("/resolve-ip/{destination_hostname}", get(resolve_ip))
        .with_state(state)
}

/// Reach the target through an explicit proxy hop, relaying the same
/// trace headers so the whole chain shows up in one trace.
async fn call_chain(
    State(state): State<AppState>,
    Path((proxy_hostname, target_hostname)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Greeting>, UpstreamError> {
    let url = upstream_url(
        state.scheme,
        &proxy_hostname,
        &format!("/call/{target_hostname}"),
    )?;

    tracing::debug!(
        proxy = %proxy_hostname,
        target = %target_hostname,
        "forwarding chained call"
    );

    let upstream = fetch_greeting(url, trace_headers(&headers)).await?;
    Ok(Json(Greeting {
        message: format!("{} <- {}", state.name, upstream),
    }))
}
