//! Transfer module for the FTP client
//!
//! Negotiates passive mode data connections and streams file bytes over
//! them. The operations are implemented on [`Session`](crate::client::Session).

pub mod data_channel;
pub mod file_ops;
pub mod modes;
pub mod operations;
pub mod results;

pub use modes::TransferMode;
pub use results::{DataEndpoint, Direction};
