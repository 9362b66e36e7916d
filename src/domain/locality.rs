//! Locality value object for street address, city and state.

use super::errors::{ContactField, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static LOCALITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\s]{4,}$").expect("Failed to compile locality regex")
});

/// An address line, city or state.
///
/// At least 4 characters, each an ASCII letter, ASCII digit or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locality(String);

impl Locality {
    /// Validate `value` as the value of `field`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLocality` tagged with `field`.
    pub fn new(field: ContactField, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !LOCALITY_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidLocality { field, value });
        }
        Ok(Self(value))
    }

    pub fn address(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(ContactField::Address, value)
    }

    pub fn city(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(ContactField::City, value)
    }

    pub fn state(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(ContactField::State, value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Locality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
