//! RAX FTP Client
//!
//! A passive mode FTP client: one control session per server, one data
//! connection per transfer.
//!
//! ```no_run
//! use std::time::Duration;
//! use rax_ftp_client::{Session, TransferMode};
//!
//! # async fn run() -> rax_ftp_client::Result<()> {
//! let mut session = Session::dial("test.rebex.net:21").await?;
//! session.login("demo", "password").await?;
//! session
//!     .download_file("/readme.txt", "readme.txt", TransferMode::Ascii, Duration::ZERO)
//!     .await?;
//! session.logout().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod transfer;
pub mod utils;

pub use client::{Session, SessionState};
pub use config::ClientConfig;
pub use error::{FtpClientError, Result};
pub use protocol::Response;
pub use transfer::TransferMode;
