//! The four demo services.
//!
//! Each submodule assembles the axum router for one service. Handlers
//! shared by more than one service (greeting, single-hop forward, DNS
//! diagnostic) live here; service-specific routes live with their service.

pub mod client;
pub mod proxy;
pub mod standalone;
pub mod target;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::dns::{self, ResolveOutcome};
use crate::error::UpstreamError;
use crate::trace::trace_headers;
use crate::upstream::{fetch_greeting, upstream_url, Greeting, UpstreamScheme};

/// State shared by every handler of a service instance. Read-only after
/// startup; nothing mutable is shared between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Display name announced by the greeting route and prefixed onto
    /// forwarded messages.
    pub name: String,
    /// Scheme used for outbound hops.
    pub scheme: UpstreamScheme,
    /// Metadata server consulted for identity tokens.
    pub metadata_host: String,
}

impl AppState {
    pub fn new(
        name: impl Into<String>,
        scheme: UpstreamScheme,
        metadata_host: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scheme,
            metadata_host: metadata_host.into(),
        }
    }
}

/// Greeting route shared by every service.
pub(crate) async fn hello(State(state): State<AppState>) -> Json<Greeting> {
    Json(Greeting {
        message: state.name,
    })
}

/// Forward to the target's greeting route, relaying trace headers, and
/// prefix the local name onto the reply.
pub(crate) async fn call_target(
    State(state): State<AppState>,
    Path(target_hostname): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Greeting>, UpstreamError> {
    let url = upstream_url(state.scheme, &target_hostname, "/")?;

    tracing::debug!(target = %target_hostname, "forwarding call");

    let upstream = fetch_greeting(url, trace_headers(&headers)).await?;
    Ok(Json(Greeting {
        message: format!("{} <- {}", state.name, upstream),
    }))
}

/// Report how a hostname resolves from this service.
pub(crate) async fn resolve_ip(
    Path(destination_hostname): Path<String>,
) -> Json<ResolveOutcome> {
    Json(dns::resolve(&destination_hostname).await)
}
