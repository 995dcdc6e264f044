//! Configuration management for the contacts server.
//!
//! Settings are read from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default cap on request bodies (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Database path that selects a private in-memory store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Configuration for the contacts server.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file, or `:memory:` (default: "contacts.db")
    pub database_path: String,

    /// Directory receiving uploaded contact images (default: "uploads")
    pub upload_dir: PathBuf,

    /// Listen address (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Largest accepted request body in bytes (default: 10 MiB)
    pub max_upload_bytes: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACTS_DATABASE_PATH`: SQLite file or `:memory:`
    /// - `CONTACTS_UPLOAD_DIR`: image content directory
    /// - `CONTACTS_BIND_ADDR`: socket address to listen on
    /// - `CONTACTS_MAX_UPLOAD_BYTES`: request body limit, must be positive
    /// - `LOG_LEVEL`: logging level
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not write to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let database_path =
            env::var("CONTACTS_DATABASE_PATH").unwrap_or(defaults.database_path);
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DATABASE_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let upload_dir = env::var("CONTACTS_UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);

        let bind_addr = Self::parse_env_socket_addr("CONTACTS_BIND_ADDR", defaults.bind_addr)?;

        let max_upload_bytes =
            Self::parse_env_usize("CONTACTS_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;
        if max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_MAX_UPLOAD_BYTES".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            database_path,
            upload_dir,
            bind_addr,
            max_upload_bytes,
            log_level,
        })
    }

    /// True when the database path selects an in-memory store.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a socket address with a default value.
    fn parse_env_socket_addr(var_name: &str, default: SocketAddr) -> ConfigResult<SocketAddr> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a socket address like 127.0.0.1:8080, got: {}", val),
                }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: "contacts.db".to_string(),
            upload_dir: PathBuf::from("uploads"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_level: "info".to_string(),
        }
    }
}
