//! Standalone client service: calls targets outside the mesh over HTTPS,
//! optionally attaching an identity token from the metadata server.

use clap::Parser;

use mesh_demo::config::ServiceConfig;
use mesh_demo::observability::init_tracing;
use mesh_demo::server;
use mesh_demo::services::standalone;
use mesh_demo::{AppState, UpstreamScheme};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mesh_demo=debug,tower_http=debug");

    let config = ServiceConfig::parse();
    let port = config.port_or(8080);
    let name = config.name_or("CLIENT");

    tracing::info!(
        port,
        name = %name,
        metadata_host = %config.metadata_host,
        "standalone client service starting"
    );

    let state = AppState::new(name, UpstreamScheme::Https, &config.metadata_host);
    server::serve(standalone::router(state), port).await?;

    Ok(())
}
