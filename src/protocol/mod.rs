//! FTP Protocol implementation
//!
//! Handles command formatting, reply reading, code classification and
//! passive mode decoding.

pub mod classifier;
pub mod commands;
pub mod passive;
pub mod reader;
pub mod responses;

pub use classifier::{classify, expect_code};
pub use commands::{Command, format_command};
pub use passive::extract_data_port;
pub use reader::read_response;
pub use responses::Response;
