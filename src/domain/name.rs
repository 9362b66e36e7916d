//! PersonName value object.

use super::errors::{ContactField, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,}$").expect("Failed to compile name regex"));

/// A first or last name.
///
/// Names start with an uppercase ASCII letter followed by at least two more
/// ASCII letters.
///
/// # Example
///
/// ```
/// use address_book::domain::PersonName;
///
/// let name = PersonName::first("Raksha").unwrap();
/// assert_eq!(name.as_str(), "Raksha");
/// assert!(PersonName::first("raksha").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonName(String);

impl PersonName {
    /// Validate `name` as the value of `field`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` tagged with `field` if the name
    /// does not match the format.
    pub fn new(field: ContactField, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::InvalidName { field, value: name });
        }
        Ok(Self(name))
    }

    /// Validate a first name.
    pub fn first(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(ContactField::FirstName, name)
    }

    /// Validate a last name.
    pub fn last(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(ContactField::LastName, name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(PersonName::first("Raksha").is_ok());
        assert!(PersonName::first("Ash").is_ok());
        assert!(PersonName::last("McDonald").is_ok());
    }

    #[test]
    fn test_name_validates_format() {
        assert!(PersonName::first("raksha").is_err());
        assert!(PersonName::first("Ra").is_err());
        assert!(PersonName::first("").is_err());
        assert!(PersonName::first("Anne Marie").is_err());
        assert!(PersonName::first("O'Neil").is_err());
        assert!(PersonName::first("Jos3").is_err());
        assert!(PersonName::first("Émile").is_err());
    }

    #[test]
    fn test_name_error_carries_field() {
        let err = PersonName::last("x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidName {
                field: ContactField::LastName,
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_name_serialization() {
        let name = PersonName::first("Nisha").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Nisha\"");
    }
}
