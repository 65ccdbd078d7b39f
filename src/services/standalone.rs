//! Standalone client: calls that leave the mesh, with and without an
//! identity token. No inbound headers are forwarded; there is no sidecar
//! on the far side to consume them.

use axum::extract::{Path, State};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::UpstreamError;
use crate::identity;
use crate::upstream::{fetch_greeting, upstream_url, Greeting};

use super::{hello, resolve_ip, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/call-without-authheader/{target_hostname}", get(call_plain))
        .route(
            "/call-with-authheader/{target_hostname}",
            get(call_with_token),
        )
        .route("/resolve-ip/{destination_hostname}", get(resolve_ip))
        .with_state(state)
}

/// Forward to the target with no extra headers.
async fn call_plain(
    State(state): State<AppState>,
    Path(target_hostname): Path<String>,
) -> Result<Json<Greeting>, UpstreamError> {
    let url = upstream_url(state.scheme, &target_hostname, "/")?;

    tracing::debug!(target = %target_hostname, "forwarding call without auth header");

    let upstream = fetch_greeting(url, HeaderMap::new()).await?;
    Ok(Json(Greeting {
        message: format!("{} <- {}", state.name, upstream),
    }))
}

/// Forward to the target with a freshly fetched bearer token, using the
/// target URL as the token audience.
async fn call_with_token(
    State(state): State<AppState>,
    Path(target_hostname): Path<String>,
) -> Result<Json<Greeting>, UpstreamError> {
    let url = upstream_url(state.scheme, &target_hostname, "/")?;

    tracing::debug!(target = %target_hostname, "forwarding call with auth header");

    let token = identity::fetch_id_token(&state.metadata_host, url.as_str()).await?;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, identity::bearer(&token)?);

    let upstream = fetch_greeting(url, headers).await?;
    Ok(Json(Greeting {
        message: format!("{} <- {}", state.name, upstream),
    }))
}
