/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration.
 *
 * # Configuration Sources
 *
 * Configuration is layered, later sources overriding earlier ones:
 *
 * 1. Built-in defaults (port 3000, admin secret `admin123`)
 * 2. A TOML file named by `ZCODE_CONFIG`, if set
 * 3. Environment variables:
 *    - `PORT` / `SERVER_PORT` - listen port
 *    - `ZCODE_BIND_ADDR` - full listen address, wins over the port variables
 *    - `ZCODE_ADMIN_SECRET` - operator secret for the admin login
 *    - `ZCODE_TALE_REWARD`, `ZCODE_APPROVAL_REWARD`, `ZCODE_MESSAGE_REWARD` - point rewards
 *    - `ZCODE_MAX_BODY_BYTES` - request body limit (media payloads travel inline)
 *    - `ZCODE_LOG` - default tracing filter when `RUST_LOG` is unset
 *
 * # Example
 *
 * ```toml
 * bind_addr = "127.0.0.1:8080"
 * admin_secret = "change-me"
 * tale_reward = 5
 * ```
 */

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_VAR: &str = "ZCODE_CONFIG";

/// Runtime configuration of the server
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP/WebSocket listener binds to
    pub bind_addr: SocketAddr,
    /// Fixed operator secret checked by the admin login
    pub admin_secret: String,
    /// Points awarded to an owner for submitting a tale
    pub tale_reward: u64,
    /// Points awarded to an owner when their tale is approved
    pub approval_reward: u64,
    /// Points awarded to a sender per routed chat message
    pub message_reward: u64,
    /// Maximum request body size in bytes
    pub max_body_bytes: usize,
    /// Default tracing filter
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            admin_secret: "admin123".to_string(),
            tale_reward: 10,
            approval_reward: 1,
            message_reward: 1,
            max_body_bytes: 8 * 1024 * 1024,
            log_filter: "info,zcode=debug".to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// Reads the TOML file named by `ZCODE_CONFIG` when set, then applies
    /// environment overrides and validates the result.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        let config = base.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parse TOML text; missing keys keep their defaults
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply environment-style overrides from a lookup function
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in ["SERVER_PORT", "PORT"] {
            if let Some(port) = lookup(key) {
                let port = parse_value::<u16>(key, &port)?;
                self.bind_addr.set_port(port);
            }
        }
        if let Some(addr) = lookup("ZCODE_BIND_ADDR") {
            self.bind_addr = parse_value("ZCODE_BIND_ADDR", &addr)?;
        }
        if let Some(secret) = lookup("ZCODE_ADMIN_SECRET") {
            self.admin_secret = secret;
        }
        if let Some(value) = lookup("ZCODE_TALE_REWARD") {
            self.tale_reward = parse_value("ZCODE_TALE_REWARD", &value)?;
        }
        if let Some(value) = lookup("ZCODE_APPROVAL_REWARD") {
            self.approval_reward = parse_value("ZCODE_APPROVAL_REWARD", &value)?;
        }
        if let Some(value) = lookup("ZCODE_MESSAGE_REWARD") {
            self.message_reward = parse_value("ZCODE_MESSAGE_REWARD", &value)?;
        }
        if let Some(value) = lookup("ZCODE_MAX_BODY_BYTES") {
            self.max_body_bytes = parse_value("ZCODE_MAX_BODY_BYTES", &value)?;
        }
        if let Some(filter) = lookup("ZCODE_LOG") {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("admin_secret"));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_body_bytes".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.config.bind_addr = addr;
        self
    }

    pub fn admin_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.admin_secret = secret.into();
        self
    }

    pub fn tale_reward(mut self, points: u64) -> Self {
        self.config.tale_reward = points;
        self
    }

    pub fn approval_reward(mut self, points: u64) -> Self {
        self.config.approval_reward = points;
        self
    }

    pub fn message_reward(mut self, points: u64) -> Self {
        self.config.message_reward = points;
        self
    }

    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.config.max_body_bytes = bytes;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
