//! Trace-header propagation.
//!
//! Headers on this allow-list are relayed unmodified across hops so a
//! distributed trace survives the chain; everything else on the inbound
//! request is dropped before forwarding.

use axum::http::HeaderMap;

/// Headers propagated to the next hop (Cloud Trace, W3C trace context,
/// B3, and the request ID).
pub const TRACE_HEADERS: [&str; 9] = [
    "x-cloud-trace-context",
    "traceparent",
    "tracestate",
    "x-b3-traceid",
    "x-b3-spanid",
    "x-b3-parentspanid",
    "x-b3-sampled",
    "x-b3-flags",
    "x-request-id",
];

/// Filter the inbound headers down to the propagation allow-list.
///
/// `HeaderName` is lowercase by construction, so the match is
/// case-insensitive with respect to whatever the client sent.
pub fn trace_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in inbound {
        if TRACE_HEADERS.contains(&name.as_str()) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}
