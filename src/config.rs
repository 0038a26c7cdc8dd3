//! Configuration management for the RAX FTP client
//!
//! Settings come from an optional `ftp-client.toml` with environment
//! overrides (`FTP_CLIENT_HOST`, `FTP_CLIENT_TIMEOUT_SECS`, ...).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::transfer::TransferMode;
use crate::utils::validation::{validate_credentials, validate_host};

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Control connection address, `host:port`
    pub host: String,

    pub username: String,
    pub password: String,

    /// Representation type sent with `TYPE` before each transfer
    pub mode: TransferMode,

    /// Read deadline for data connections in seconds, 0 disables it
    pub timeout_secs: u64,

    /// Read the server's final reply after each transfer
    pub await_completion: bool,
}

impl ClientConfig {
    /// Load configuration from ftp-client.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("mode", "binary")?
            .set_default("timeout_secs", 0)?
            .set_default("await_completion", true)?
            .add_source(File::with_name("ftp-client").required(false))
            .add_source(Environment::with_prefix("FTP_CLIENT").try_parsing(true))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_host(&self.host).map_err(|e| ConfigError::Message(e.to_string()))?;
        validate_credentials(&self.username, &self.password)
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(())
    }

    /// Get data read timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
