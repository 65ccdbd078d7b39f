//! Proxy service: forwards to a target over the mesh, relaying trace
//! headers.

use clap::Parser;

use mesh_demo::config::ServiceConfig;
use mesh_demo::observability::init_tracing;
use mesh_demo::server;
use mesh_demo::services::proxy;
use mesh_demo::{AppState, UpstreamScheme};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mesh_demo=debug,tower_http=debug");

    let config = ServiceConfig::parse();
    let port = config.port_or(8081);
    let name = config.name_or("PROXY");

    tracing::info!(port, name = %name, "proxy service starting");

    let state = AppState::new(name, UpstreamScheme::Http, &config.metadata_host);
    server::serve(proxy::router(state), port).await?;

    Ok(())
}
