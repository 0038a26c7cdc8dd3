//! Transfer result types
//!
//! Defines structures produced while negotiating and running a transfer.

use std::fmt;

/// Where the server expects the data connection for one transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEndpoint {
    pub host: String,
    pub port: u16,
}

impl DataEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for DataEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Which way the bytes flow over the data channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Download,
    Upload,
}
