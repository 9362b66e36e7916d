//! Domain validation errors.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The contact fields that carry a format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl ContactField {
    /// The camelCase field name used in serialized contacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while validating contact fields.
///
/// Each variant names a field group and carries the exact field plus the
/// rejected value, so callers can report which input was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// First or last name is not a capitalised word of at least 3 letters.
    #[error("Invalid {field} {value:?}: name must start with a capital letter and have at least 3 letters")]
    InvalidName { field: ContactField, value: String },

    /// Address, city or state is shorter than 4 characters or has symbols.
    #[error("Invalid {field} {value:?}: must be at least 4 letters, digits or spaces")]
    InvalidLocality { field: ContactField, value: String },

    /// Zip is not exactly 6 digits.
    #[error("Invalid zip {0:?}: must be exactly 6 digits")]
    InvalidZip(String),

    /// Phone is not a 10 digit number starting with 7, 8 or 9.
    #[error("Invalid phone {0:?}: must be 10 digits starting with 7, 8 or 9")]
    InvalidPhone(String),

    /// Email does not have the local@domain.tld shape.
    #[error("Invalid email {0:?}")]
    InvalidEmail(String),
}

impl ValidationError {
    /// The field whose value was rejected.
    pub fn field(&self) -> ContactField {
        match self {
            Self::InvalidName { field, .. } | Self::InvalidLocality { field, .. } => *field,
            Self::InvalidZip(_) => ContactField::Zip,
            Self::InvalidPhone(_) => ContactField::Phone,
            Self::InvalidEmail(_) => ContactField::Email,
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidName { value, .. } | Self::InvalidLocality { value, .. } => value,
            Self::InvalidZip(value) | Self::InvalidPhone(value) | Self::InvalidEmail(value) => {
                value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_reports_field() {
        let err = ValidationError::InvalidName {
            field: ContactField::LastName,
            value: "xy".to_string(),
        };
        assert_eq!(err.field(), ContactField::LastName);
        assert_eq!(err.value(), "xy");
        assert!(err.to_string().contains("lastName"));

        let err = ValidationError::InvalidZip("12345".to_string());
        assert_eq!(err.field(), ContactField::Zip);
        assert_eq!(err.to_string(), "Invalid zip \"12345\": must be exactly 6 digits");
    }

    #[test]
    fn test_field_display() {
        assert_eq!(ContactField::FirstName.to_string(), "firstName");
        assert_eq!(ContactField::Email.to_string(), "email");
    }
}
