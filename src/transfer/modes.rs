//! FTP Transfer modes
//!
//! Representation types negotiated with `TYPE` before every transfer.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// FTP transfer representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    Ascii,
    /// Also known as IMAGE
    #[default]
    #[serde(alias = "image")]
    Binary,
}

impl TransferMode {
    /// Argument of the `TYPE` command
    pub fn wire_code(self) -> &'static str {
        match self {
            TransferMode::Ascii => "A",
            TransferMode::Binary => "I",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::Ascii => write!(f, "ascii"),
            TransferMode::Binary => write!(f, "binary"),
        }
    }
}

impl FromStr for TransferMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "ascii" => Ok(TransferMode::Ascii),
            "i" | "binary" | "image" => Ok(TransferMode::Binary),
            other => Err(format!("Unknown transfer mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_names() {
        assert_eq!("ASCII".parse::<TransferMode>().unwrap(), TransferMode::Ascii);
        assert_eq!("image".parse::<TransferMode>().unwrap(), TransferMode::Binary);
        assert_eq!("I".parse::<TransferMode>().unwrap(), TransferMode::Binary);
        assert!("ebcdic".parse::<TransferMode>().is_err());
    }
}
