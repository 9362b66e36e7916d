//! Contact model representing one person in the address book.

use crate::domain::{
    ContactField, EmailAddress, Locality, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use crate::error::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw, unvalidated contact fields.
///
/// This is the input side of [`Contact::new`]. Deserializing a [`Contact`]
/// goes through this type, so JSON input is validated the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl ContactDetails {
    /// Convenience constructor taking the eight fields in display order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// A validated contact.
///
/// A `Contact` can only be obtained from [`Contact::new`] (or the equivalent
/// `TryFrom`/`Deserialize` paths), so every instance satisfies all field
/// rules. Fields are read-only; edits build a replacement through
/// [`ContactUpdate::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactDetails")]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    address: Locality,
    city: Locality,
    state: Locality,
    zip: ZipCode,
    phone: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Validate `details` and build a contact.
    ///
    /// Fields are checked in order: names, then address, city and state,
    /// then zip, phone and email. The first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field that breaks its
    /// format rule.
    pub fn new(details: ContactDetails) -> ValidationResult<Self> {
        let ContactDetails {
            first_name,
            last_name,
            address,
            city,
            state,
            zip,
            phone,
            email,
        } = details;

        Ok(Self {
            first_name: PersonName::new(ContactField::FirstName, first_name)?,
            last_name: PersonName::new(ContactField::LastName, last_name)?,
            address: Locality::new(ContactField::Address, address)?,
            city: Locality::new(ContactField::City, city)?,
            state: Locality::new(ContactField::State, state)?,
            zip: ZipCode::new(zip)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn zip(&self) -> &str {
        self.zip.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// The logical key: `(first_name, last_name)`.
    pub fn key(&self) -> (&str, &str) {
        (self.first_name(), self.last_name())
    }

    /// Whether this contact has the given logical key.
    pub fn has_key(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name() == first_name && self.last_name() == last_name
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Copy the fields back out as raw strings.
    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            first_name: self.first_name().to_string(),
            last_name: self.last_name().to_string(),
            address: self.address().to_string(),
            city: self.city().to_string(),
            state: self.state().to_string(),
            zip: self.zip().to_string(),
            phone: self.phone().to_string(),
            email: self.email().to_string(),
        }
    }

    /// Consume the contact, returning its fields as raw strings.
    pub fn into_details(self) -> ContactDetails {
        ContactDetails {
            first_name: self.first_name.into_inner(),
            last_name: self.last_name.into_inner(),
            address: self.address.into_inner(),
            city: self.city.into_inner(),
            state: self.state.into_inner(),
            zip: self.zip.into_inner(),
            phone: self.phone.into_inner(),
            email: self.email.into_inner(),
        }
    }
}

impl TryFrom<ContactDetails> for Contact {
    type Error = ValidationError;

    fn try_from(details: ContactDetails) -> Result<Self, Self::Error> {
        Contact::new(details)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {} {}, {}, {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

/// A partial update for an existing contact.
///
/// Only the `Some` fields are overlaid; everything else keeps its current
/// value. A present but empty string is still a value and will fail
/// validation rather than fall back to the old field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactUpdate {
    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overlay this update onto `contact` and re-validate every field.
    ///
    /// `contact` itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] of the merged fields.
    pub fn apply(&self, contact: &Contact) -> ValidationResult<Contact> {
        let mut details = contact.details();

        if let Some(first_name) = &self.first_name {
            details.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            details.last_name = last_name.clone();
        }
        if let Some(address) = &self.address {
            details.address = address.clone();
        }
        if let Some(city) = &self.city {
            details.city = city.clone();
        }
        if let Some(state) = &self.state {
            details.state = state.clone();
        }
        if let Some(zip) = &self.zip {
            details.zip = zip.clone();
        }
        if let Some(phone) = &self.phone {
            details.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            details.email = email.clone();
        }

        Contact::new(details)
    }
}
