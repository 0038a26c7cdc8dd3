//! Module `state`
//!
//! Lifecycle of a control session.

use std::fmt;

/// Where a [`Session`](crate::client::Session) is in its lifecycle.
///
/// `Disconnected` is only reached again after `logout`; a session is never
/// handed out before the welcome reply was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Disconnected => write!(f, "disconnected"),
            SessionState::Connected => write!(f, "connected"),
            SessionState::Authenticated => write!(f, "authenticated"),
        }
    }
}
