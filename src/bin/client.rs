//! In-mesh client service: forwards to a target or chains through a
//! proxy, and reports DNS resolution as seen from inside the mesh.

use clap::Parser;

use mesh_demo::config::ServiceConfig;
use mesh_demo::observability::init_tracing;
use mesh_demo::server;
use mesh_demo::services::client;
use mesh_demo::{AppState, UpstreamScheme};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mesh_demo=debug,tower_http=debug");

    let config = ServiceConfig::parse();
    let port = config.port_or(8080);
    let name = config.name_or("CLIENT");

    tracing::info!(port, name = %name, "client service starting");

    let state = AppState::new(name, UpstreamScheme::Http, &config.metadata_host);
    server::serve(client::router(state), port).await?;

    Ok(())
}
