//! Client session management
//!
//! Handles the control connection, authentication and session lifecycle.

pub mod session;
pub mod state;

pub use session::Session;
pub use state::SessionState;
