//! DNS resolution diagnostic.
//!
//! Used to observe how names resolve from inside the mesh. Resolution
//! problems are data here, not failures: the route always answers 200 and
//! the `status` field carries the outcome.

use serde::Serialize;
use tokio::net::lookup_host;

/// Outcome of one resolution attempt.
#[derive(Debug, Serialize)]
pub struct ResolveOutcome {
    pub status: &'static str,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Resolve `hostname` through the runtime resolver.
///
/// Three states: `Success` with the first resolved address, `Failed` when
/// the resolver reports an error, `Error` when resolution succeeded but
/// produced no addresses.
pub async fn resolve(hostname: &str) -> ResolveOutcome {
    match lookup_host((hostname, 0u16)).await {
        Ok(mut addrs) => match addrs.next() {
            Some(addr) => ResolveOutcome {
                status: "Success",
                hostname: hostname.to_string(),
                resolved_ip: Some(addr.ip().to_string()),
                error: None,
                detail: None,
            },
            None => ResolveOutcome {
                status: "Error",
                hostname: hostname.to_string(),
                resolved_ip: None,
                error: Some("An unexpected error occurred".to_string()),
                detail: Some("resolver returned no addresses".to_string()),
            },
        },
        Err(e) => ResolveOutcome {
            status: "Failed",
            hostname: hostname.to_string(),
            resolved_ip: None,
            error: Some("Name resolution failed".to_string()),
            detail: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_loopback() {
        let outcome = resolve("localhost").await;
        assert_eq!(outcome.status, "Success");
        let ip = outcome.resolved_ip.unwrap();
        assert!(ip.parse::<std::net::IpAddr>().is_ok(), "not an address: {ip}");
    }

    #[tokio::test]
    async fn test_resolve_literal_address() {
        let outcome = resolve("127.0.0.1").await;
        assert_eq!(outcome.status, "Success");
        assert_eq!(outcome.resolved_ip.as_deref(), Some("127.0.0.1"));
    }

    #[tokio::test]
    async fn test_resolve_nonexistent_name() {
        // .invalid is reserved and never resolves (RFC 2606).
        let outcome = resolve("no-such-host.invalid").await;
        assert_eq!(outcome.status, "Failed");
        assert!(outcome.resolved_ip.is_none());
        assert!(outcome.error.is_some());
        assert!(outcome.detail.is_some());
    }
}
