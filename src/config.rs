//! Per-service runtime settings.
//!
//! The deployment configures these services through environment variables
//! only (`PORT`, `K_SERVICE`); clap's env fallbacks cover that while
//! keeping the flags usable for local runs. Port and name defaults differ
//! per binary, so both are optional here and each main supplies its own.

use clap::Parser;

use crate::identity::DEFAULT_METADATA_HOST;

/// Settings shared by every service binary.
#[derive(Debug, Parser)]
pub struct ServiceConfig {
    /// Port to listen on.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Display name returned by the greeting route.
    #[arg(long = "service-name", env = "K_SERVICE")]
    pub service_name: Option<String>,

    /// Metadata server host consulted for identity tokens.
    #[arg(long, env = "GCE_METADATA_HOST", default_value = DEFAULT_METADATA_HOST)]
    pub metadata_host: String,
}

impl ServiceConfig {
    pub fn port_or(&self, default: u16) -> u16 {
        self.port.unwrap_or(default)
    }

    pub fn name_or(&self, default: &str) -> String {
        self.service_name
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}
