//! Shared fixtures for the integration tests.
//!
//! Every fixture is a real axum listener on an ephemeral port; tests
//! drive the services over actual sockets the way the mesh would.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use mesh_demo::{AppState, UpstreamScheme};

/// Spawn a bare router on an ephemeral port and return its address.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Spawn one of the demo services with its middleware stack attached.
#[allow(dead_code)]
pub async fn spawn_service(router: Router) -> SocketAddr {
    spawn(mesh_demo::server::with_middleware(router)).await
}

/// Service state for tests: plain HTTP upstream, unreachable metadata
/// host unless a test overrides it.
#[allow(dead_code)]
pub fn state(name: &str) -> AppState {
    AppState::new(name, UpstreamScheme::Http, "metadata.invalid")
}

/// Backend answering `/` with a fixed status and body.
#[allow(dead_code)]
pub fn fixed_backend(status: u16, body: &'static str) -> Router {
    let status = StatusCode::from_u16(status).unwrap();
    Router::new().route("/", get(move || async move { (status, body) }))
}

/// Greeting target that records the headers of every request it serves.
#[allow(dead_code)]
pub fn capturing_target(
    name: &'static str,
    seen: Arc<Mutex<Vec<HeaderMap>>>,
) -> Router {
    async fn handler(
        State((name, seen)): State<(&'static str, Arc<Mutex<Vec<HeaderMap>>>)>,
        headers: HeaderMap,
    ) -> Json<serde_json::Value> {
        seen.lock().unwrap().push(headers);
        Json(serde_json::json!({ "message": name }))
    }

    Router::new()
        .route("/", get(handler))
        .with_state((name, seen))
}

/// Stand-in for the GCE metadata server, answering the identity path
/// with a fixed token.
#[allow(dead_code)]
pub fn metadata_backend(token: &'static str) -> Router {
    Router::new().route(
        "/computeMetadata/v1/instance/service-accounts/default/identity",
        get(move || async move { token }),
    )
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
