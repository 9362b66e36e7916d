//! ZipCode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("Failed to compile zip regex"));

/// A six digit postal code.
///
/// Zip codes are kept as strings so leading zeros survive and ordering is
/// lexicographic: `"099999" < "100000"`.
///
/// # Example
///
/// ```
/// use address_book::domain::ZipCode;
///
/// let zip = ZipCode::new("400001").unwrap();
/// assert_eq!(zip.as_str(), "400001");
///
/// let padded = ZipCode::try_from(99_999u32).unwrap();
/// assert_eq!(padded.as_str(), "099999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipCode(String);

impl ZipCode {
    /// Largest value accepted by the numeric constructor.
    pub const MAX_NUMERIC: u32 = 999_999;

    /// Create a new ZipCode from its textual form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` unless the input is exactly six
    /// ASCII digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();
        if !ZIP_REGEX.is_match(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }
        Ok(Self(zip))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<u32> for ZipCode {
    type Error = ValidationError;

    /// Build a zip from a fixed-width integer, zero padded to six digits.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > Self::MAX_NUMERIC {
            return Err(ValidationError::InvalidZip(value.to_string()));
        }
        Ok(Self(format!("{:06}", value)))
    }
}

impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
