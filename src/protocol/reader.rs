//! Module `reader`
//!
//! Reads one complete reply from the control channel. Lines are consumed
//! until the terminal line (three digits followed by a space) arrives; any
//! continuation lines before it are kept in the reply body.

use std::io::{Error, ErrorKind};
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{ProtocolError, Result};
use crate::protocol::Response;

fn terminal_line() -> &'static Regex {
    static TERMINAL: OnceLock<Regex> = OnceLock::new();
    TERMINAL.get_or_init(|| Regex::new(r"^[0-9]{3} ").expect("terminal line pattern is valid"))
}

/// Returns true if `line` ends a (possibly multi-line) reply.
pub fn is_terminal_line(line: &str) -> bool {
    terminal_line().is_match(line)
}

/// Reads a reply from `reader`.
///
/// Reading stops right after the terminal line, so the next reply stays
/// buffered in `reader` untouched. Lines have no length limit.
///
/// # Errors
///
/// * `Io` if the read fails or the stream ends before a terminal line.
/// * `Protocol` if the status code is not numeric.
pub async fn read_response<R>(reader: &mut R) -> Result<Response>
where
    R: AsyncBufRead + Unpin,
{
    let mut text = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                "control channel closed before a complete reply",
            )
            .into());
        }

        let decoded = String::from_utf8_lossy(&line);
        debug!("<-- {}", decoded.trim_end());
        text.push_str(&decoded);

        if is_terminal_line(&decoded) {
            let code = parse_code(&decoded)?;
            return Ok(Response::new(code, text));
        }
    }
}

/// Parses the three-digit status code at the start of `line`.
pub fn parse_code(line: &str) -> Result<u16> {
    line.get(0..3)
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| ProtocolError::InvalidCode(line.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::responses::{OK, PASSIVE_MODE, READY, TRANSFER_COMPLETE};

    #[tokio::test]
    async fn test_single_line_reply() {
        let mut input: &[u8] = b"220 Service ready\r\n";
        let response = read_response(&mut input).await.unwrap();
        assert_eq!(response.code, READY);
        assert_eq!(response.text, "220 Service ready\r\n");
    }

    #[tokio::test]
    async fn test_multi_line_reply_is_reassembled() {
        let mut input: &[u8] = b"226-First line\r\n\
            some continuation text\r\n\
            226-Third line\r\n\
            226 Transfer complete\r\n";
        let response = read_response(&mut input).await.unwrap();
        assert_eq!(response.code, TRANSFER_COMPLETE);
        assert_eq!(response.line_count(), 4);
        assert!(response.text.starts_with("226-First line"));
        assert!(response.text.ends_with("226 Transfer complete\r\n"));
    }

    #[tokio::test]
    async fn test_does_not_read_into_next_reply() {
        let mut input: &[u8] = b"200 Type set\r\n227 Entering Passive Mode (1,2,3,4,5,6).\r\n";
        let first = read_response(&mut input).await.unwrap();
        assert_eq!(first.code, OK);
        let second = read_response(&mut input).await.unwrap();
        assert_eq!(second.code, PASSIVE_MODE);
    }

    #[tokio::test]
    async fn test_long_continuation_line_is_kept_whole() {
        let long = "x".repeat(64 * 1024);
        let raw = format!("220-{}\r\n220 Ready\r\n", long);
        let mut input: &[u8] = raw.as_bytes();
        let response = read_response(&mut input).await.unwrap();
        assert_eq!(response.code, 220);
        assert_eq!(response.text.len(), raw.len());
    }

    #[tokio::test]
    async fn test_eof_before_terminal_line() {
        let mut input: &[u8] = b"220-Welcome\r\n";
        let err = read_response(&mut input).await.unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_terminal_line_pattern() {
        assert!(is_terminal_line("226 Transfer complete\r\n"));
        assert!(!is_terminal_line("226-Still going\r\n"));
        assert!(!is_terminal_line(" 226 indented\r\n"));
        assert!(!is_terminal_line("22 short\r\n"));
    }

    #[test]
    fn test_parse_code_rejects_non_numeric() {
        assert_eq!(parse_code("331 Password required").unwrap(), 331);
        assert!(parse_code("abc").unwrap_err().is_protocol());
        assert!(parse_code("").unwrap_err().is_protocol());
    }
}
