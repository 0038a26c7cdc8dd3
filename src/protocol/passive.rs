//! Passive mode reply decoding
//!
//! Finds `h1,h2,h3,h4,p1,p2` anywhere in a 227 reply and rebuilds the port.
//! The advertised address is not used: data connections always go back to
//! the control channel's hostname, which breaks for servers that advertise
//! a different host (split-horizon NAT).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ProtocolError;

fn pasv_pattern() -> &'static Regex {
    static PASV: OnceLock<Regex> = OnceLock::new();
    PASV.get_or_init(|| {
        Regex::new(r"(\d{1,3}),(\d{1,3}),(\d{1,3}),(\d{1,3}),(\d{1,3}),(\d{1,3})")
            .expect("PASV pattern is valid")
    })
}

/// Extracts the data port from the body of a PASV reply.
pub fn extract_data_port(text: &str) -> Result<u16, ProtocolError> {
    let missing = || ProtocolError::MissingPassivePort(text.to_string());

    let groups = pasv_pattern().captures(text).ok_or_else(missing)?;
    let port_upper: u8 = groups[5].parse().map_err(|_| missing())?;
    let port_lower: u8 = groups[6].parse().map_err(|_| missing())?;

    Ok(u16::from(port_upper) * 256 + u16::from(port_lower))
}
