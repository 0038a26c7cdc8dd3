//! Module `commands`
//!
//! Defines the FTP commands the client emits and their wire format.

use std::fmt;

use crate::transfer::TransferMode;

/// Represents an FTP command sent on the control channel.
///
/// Commands that carry an argument store it inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    User(String),
    Pass(String),
    Quit,
    Pasv,
    Type(TransferMode),
    Retr(String), // Retrieve/download file
    Stor(String), // Store/upload file
}

impl Command {
    /// The command verb as sent to the server
    pub fn verb(&self) -> &'static str {
        match self {
            Command::User(_) => "USER",
            Command::Pass(_) => "PASS",
            Command::Quit => "QUIT",
            Command::Pasv => "PASV",
            Command::Type(_) => "TYPE",
            Command::Retr(_) => "RETR",
            Command::Stor(_) => "STOR",
        }
    }

    /// The argument text, empty for commands without one
    pub fn argument(&self) -> String {
        match self {
            Command::User(arg) | Command::Pass(arg) | Command::Retr(arg) | Command::Stor(arg) => {
                arg.clone()
            }
            Command::Type(mode) => mode.wire_code().to_string(),
            Command::Quit | Command::Pasv => String::new(),
        }
    }
}

/// Formats `verb` and `argument` as one CRLF-terminated command line.
pub fn format_command(verb: &str, argument: &str) -> String {
    if argument.is_empty() {
        format!("{}\r\n", verb)
    } else {
        format!("{} {}\r\n", verb, argument)
    }
}

impl fmt::Display for Command {
    /// Log-safe rendering; the password never appears.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pass(_) => write!(f, "PASS ****"),
            other => write!(f, "{}", format_command(other.verb(), &other.argument()).trim_end()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(format_command("USER", "demo"), "USER demo\r\n");
        assert_eq!(format_command("PASV", ""), "PASV\r\n");
    }

    #[test]
    fn test_type_argument_uses_mode_code() {
        assert_eq!(Command::Type(TransferMode::Ascii).argument(), "A");
        assert_eq!(Command::Type(TransferMode::Binary).argument(), "I");
    }

    #[test]
    fn test_display_masks_password() {
        assert_eq!(Command::Pass("secret".into()).to_string(), "PASS ****");
        assert_eq!(Command::Retr("/a.txt".into()).to_string(), "RETR /a.txt");
    }
}
