//! Target service: answers a greeting so the other services have
//! something to call.

use clap::Parser;

use mesh_demo::config::ServiceConfig;
use mesh_demo::observability::init_tracing;
use mesh_demo::server;
use mesh_demo::services::target;
use mesh_demo::{AppState, UpstreamScheme};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("mesh_demo=debug,tower_http=debug");

    let config = ServiceConfig::parse();
    let port = config.port_or(8082);
    let name = config.name_or("TARGET");

    tracing::info!(port, name = %name, "target service starting");

    let state = AppState::new(name, UpstreamScheme::Http, &config.metadata_host);
    server::serve(target::router(state), port).await?;

    Ok(())
}
