//! Network utilities
//!
//! Host string handling for control and data connections.

/// Given a string of the form "host", "host:port", or "[ipv6::address]:port",
/// returns true if the string includes a port.
pub fn has_port(host: &str) -> bool {
    match (host.rfind(':'), host.rfind(']')) {
        (Some(colon), Some(bracket)) => colon > bracket,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Returns the hostname part of a "host:port" string, without IPv6 brackets.
pub fn hostname(host: &str) -> &str {
    let name = match host.rfind(':') {
        Some(colon) if has_port(host) => &host[..colon],
        _ => host,
    };
    name.trim_start_matches('[').trim_end_matches(']')
}
