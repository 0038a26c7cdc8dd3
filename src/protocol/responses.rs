//! FTP Response handling
//!
//! Defines the reply type and the status codes the client cares about.

use std::fmt;

pub const OK: u16 = 200;
pub const READY: u16 = 220;
pub const CLOSING: u16 = 221;
pub const TRANSFER_COMPLETE: u16 = 226;
pub const PASSIVE_MODE: u16 = 227;
pub const LOGIN_SUCCESS: u16 = 230;

/// A complete server reply: the status code and every line received for it.
///
/// `text` keeps the raw lines including their line endings, so a multi-line
/// reply reads exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: u16,
    pub text: String,
}

impl Response {
    pub fn new(code: u16, text: String) -> Self {
        Self { code, text }
    }

    /// Preliminary (1xx) replies announce that another reply will follow.
    pub fn is_preliminary(&self) -> bool {
        self.code / 100 == 1
    }

    /// Number of lines the reply spanned
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text.trim_end())
    }
}
