//! Target service: answers the greeting and nothing else.

use axum::routing::get;
use axum::Router;

use super::{hello, AppState};

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(hello)).with_state(state)
}
