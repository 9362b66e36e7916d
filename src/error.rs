//! Error types for the address book.
//!
//! Contact validation errors live in [`crate::domain::errors`]; this module
//! holds the remaining error types and the crate's `Result` aliases.

use thiserror::Error;

pub use crate::domain::ValidationError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Configured log level is not a valid filter directive
    #[error("Invalid log filter {0:?}")]
    InvalidLogFilter(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_DELETE_MODE".to_string(),
            reason: "Must be one of: all, first".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_DELETE_MODE: Must be one of: all, first"
        );

        let err = ConfigError::InvalidLogFilter("=bad".to_string());
        assert!(err.to_string().contains("=bad"));
    }
}
