//! Input validation utilities
//!
//! Checks applied to caller input before anything is written to the wire.

use crate::error::ValidationError;
use crate::utils::network::has_port;

/// Validate that a command argument cannot break the line framing
pub fn is_valid_argument(input: &str) -> bool {
    !input.contains(['\r', '\n', '\0'])
}

/// Rejects blank hosts and hosts without an explicit numeric port
pub fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.trim().is_empty() {
        return Err(ValidationError::BlankHost);
    }
    if !has_port(host) {
        return Err(ValidationError::MissingPort(host.to_string()));
    }
    // Service names like "ftp" are not resolved
    let port = host.rsplit_once(':').map_or("", |(_, port)| port);
    if port.parse::<u16>().is_err() {
        return Err(ValidationError::InvalidPort(host.to_string()));
    }
    Ok(())
}

/// Rejects blank credentials
pub fn validate_credentials(user: &str, password: &str) -> Result<(), ValidationError> {
    if user.is_empty() {
        return Err(ValidationError::BlankUser);
    }
    if password.is_empty() {
        return Err(ValidationError::BlankPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_framing() {
        assert!(is_valid_argument("/pub/readme.txt"));
        assert!(is_valid_argument(""));
        assert!(!is_valid_argument("a\r\nDELE b"));
        assert!(!is_valid_argument("a\0"));
    }

    #[test]
    fn test_validate_host() {
        assert!(matches!(validate_host(""), Err(ValidationError::BlankHost)));
        assert!(matches!(
            validate_host("example.com"),
            Err(ValidationError::MissingPort(_))
        ));
        assert!(validate_host("example.com:21").is_ok());
        assert!(validate_host("[::1]:2121").is_ok());
    }

    #[test]
    fn test_validate_host_needs_numeric_port() {
        for host in ["myserver:ftp", "myserver:", "myserver:70000", "myserver:-1", "[::1]:ftp"] {
            assert!(
                matches!(validate_host(host), Err(ValidationError::InvalidPort(_))),
                "accepted {host}"
            );
        }
    }

    #[test]
    fn test_validate_credentials() {
        assert!(matches!(
            validate_credentials("", "x"),
            Err(ValidationError::BlankUser)
        ));
        assert!(matches!(
            validate_credentials("x", ""),
            Err(ValidationError::BlankPassword)
        ));
        assert!(validate_credentials("x", "y").is_ok());
    }
}
