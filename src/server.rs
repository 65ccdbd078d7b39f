//! Listener setup, shared middleware, graceful shutdown.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Whole-request bound, strictly above the outbound call timeout so the
/// upstream error mapping fires before the request itself is cut off.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Attach the middleware stack shared by every service: request IDs
/// (generated when absent, echoed on the response), request tracing, and
/// the whole-request timeout.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

/// Bind `0.0.0.0:<port>` and run the service until shutdown.
pub async fn serve(router: Router, port: u16) -> io::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        "listening for connections"
    );

    axum::serve(listener, with_middleware(router))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
