//! Error types
//!
//! Defines the error classes surfaced by the FTP client.

use std::fmt;
use std::io;

use crate::client::SessionState;

/// Caller input rejected before any network I/O
#[derive(Debug)]
pub enum ValidationError {
    BlankHost,
    MissingPort(String),
    InvalidPort(String),
    BlankUser,
    BlankPassword,
    MalformedInput(String),
    InvalidState {
        expected: SessionState,
        actual: SessionState,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankHost => write!(f, "Host can not be blank"),
            ValidationError::MissingPort(h) => {
                write!(f, "Host must have a port, e.g. host:21 (got {})", h)
            }
            ValidationError::InvalidPort(h) => {
                write!(f, "Port must be a number between 0 and 65535 (got {})", h)
            }
            ValidationError::BlankUser => write!(f, "User can not be blank"),
            ValidationError::BlankPassword => write!(f, "Password can not be blank"),
            ValidationError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            ValidationError::InvalidState { expected, actual } => {
                write!(f, "Session is {}, operation requires {}", actual, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failures to establish the control or data connection
#[derive(Debug)]
pub enum ConnectionError {
    DialFailed(String, io::Error),
    WelcomeUnreadable(io::Error),
    WelcomeRejected(ProtocolError),
    DataPortUnreachable(String, io::Error),
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::DialFailed(addr, e) => write!(f, "Failed to dial {}: {}", addr, e),
            ConnectionError::WelcomeUnreadable(e) => {
                write!(f, "Couldn't read the server's welcome message: {}", e)
            }
            ConnectionError::WelcomeRejected(e) => {
                write!(f, "Server rejected the connection: {}", e)
            }
            ConnectionError::DataPortUnreachable(addr, e) => {
                write!(f, "Couldn't connect to server's data port {}: {}", addr, e)
            }
        }
    }
}

impl std::error::Error for ConnectionError {}

/// Replies that do not match what the conversation expects
#[derive(Debug)]
pub enum ProtocolError {
    UnexpectedCode {
        expected: u16,
        actual: u16,
        response: String,
    },
    InvalidCode(String),
    MissingPassivePort(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnexpectedCode {
                expected,
                actual,
                response,
            } => write!(
                f,
                "Bad response from server. Expected: {}, Got: {} ({})",
                expected,
                actual,
                response.trim_end()
            ),
            ProtocolError::InvalidCode(r) => {
                write!(f, "Invalid response code from server: {}", r.trim_end())
            }
            ProtocolError::MissingPassivePort(r) => {
                write!(f, "Cannot find data port in server output: {}", r.trim_end())
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

/// General FTP client error that encompasses all error classes
#[derive(Debug)]
pub enum FtpClientError {
    Validation(ValidationError),
    Connection(ConnectionError),
    Io(io::Error),
    Protocol(ProtocolError),
}

impl FtpClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FtpClientError::Validation(_))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, FtpClientError::Connection(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, FtpClientError::Io(_))
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, FtpClientError::Protocol(_))
    }

    /// Kind of the underlying I/O failure, if this is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FtpClientError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for FtpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpClientError::Validation(e) => write!(f, "Validation error: {}", e),
            FtpClientError::Connection(e) => write!(f, "Connection error: {}", e),
            FtpClientError::Io(e) => write!(f, "I/O error: {}", e),
            FtpClientError::Protocol(e) => write!(f, "Protocol error: {}", e),
        }
    }
}

impl std::error::Error for FtpClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FtpClientError::Validation(e) => Some(e),
            FtpClientError::Connection(e) => Some(e),
            FtpClientError::Io(e) => Some(e),
            FtpClientError::Protocol(e) => Some(e),
        }
    }
}

impl From<ValidationError> for FtpClientError {
    fn from(error: ValidationError) -> Self {
        FtpClientError::Validation(error)
    }
}

impl From<ConnectionError> for FtpClientError {
    fn from(error: ConnectionError) -> Self {
        FtpClientError::Connection(error)
    }
}

impl From<io::Error> for FtpClientError {
    fn from(error: io::Error) -> Self {
        FtpClientError::Io(error)
    }
}

impl From<ProtocolError> for FtpClientError {
    fn from(error: ProtocolError) -> Self {
        FtpClientError::Protocol(error)
    }
}

/// Generic Result type defaults to Result<T, FtpClientError>
pub type Result<T> = std::result::Result<T, FtpClientError>;
