//! Mesh demo services.
//!
//! Minimal HTTP services used to validate request routing and
//! identity/trace propagation through a service mesh sidecar:
//!
//! - a **target** answers a greeting,
//! - a **proxy** forwards to a target, relaying trace headers,
//! - a **client** forwards to a target directly or chains through a proxy,
//!   and can report how a hostname resolves from inside the mesh,
//! - a **standalone client** makes the same calls from outside the mesh,
//!   optionally attaching a freshly fetched identity token.
//!
//! Every route is a variation of "receive request, make one outbound call,
//! reshape the result into JSON". The outbound hop is expected to pass
//! through the sidecar transparently; nothing here implements the mesh
//! itself.

pub mod config;
pub mod dns;
pub mod error;
pub mod identity;
pub mod observability;
pub mod server;
pub mod services;
pub mod trace;
pub mod upstream;

pub use error::UpstreamError;
pub use services::AppState;
pub use upstream::{Greeting, UpstreamScheme};
