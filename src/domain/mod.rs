//! Domain value objects and types.
//!
//! Every contact field with a format rule has a newtype here. Values can only
//! be obtained through the validating constructors, so an invalid name, zip,
//! phone or email cannot be represented once it has left this module.

pub mod email;
pub mod errors;
pub mod locality;
pub mod name;
pub mod phone;
pub mod zip;

pub use email::EmailAddress;
pub use errors::{ContactField, ValidationError};
pub use locality::Locality;
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
