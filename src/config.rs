//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How many contacts a first-name delete removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    /// Remove every contact with the given first name.
    #[default]
    All,
    /// Remove only the first contact with the given first name.
    First,
}

impl FromStr for DeleteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "first" => Ok(Self::First),
            other => Err(format!("Must be one of: all, first, got: {}", other)),
        }
    }
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::First => f.write_str("first"),
        }
    }
}

/// Configuration for an address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Delete behaviour for first-name deletes (default: all)
    pub delete_mode: DeleteMode,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_LOG_LEVEL`: Logging level (default: "info")
    /// - `ADDRESS_BOOK_DELETE_MODE`: `all` or `first` (default: "all")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("ADDRESS_BOOK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let delete_mode = Self::parse_env("ADDRESS_BOOK_DELETE_MODE", DeleteMode::default())?;

        Ok(Config {
            log_level,
            delete_mode,
        })
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr<Err = String>,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            delete_mode: DeleteMode::All,
        }
    }
}
