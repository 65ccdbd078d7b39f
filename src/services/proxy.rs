//! Proxy service: one forwarding hop with trace-header relay.

use axum::routing::get;
use axum::Router;

use super::{call_target, hello, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/call/{target_hostname}", get(call_target))
        .with_state(state)
}
