//! Address Book - an in-memory collection of validated contacts.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each contact field
//! - **models**: The immutable `Contact` record and partial updates
//! - **book**: `AddressBook` with add/edit/delete, search, grouping and sorting
//! - **reports**: Serializable listings, groups and counts with text rendering
//! - **error**: Error types and `Result` aliases
//! - **config**: Configuration from environment variables
//! - **logging**: `tracing` subscriber setup

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;

pub use book::{AddOutcome, AddressBook, DeleteOutcome, EditOutcome, SortKey};
pub use config::{Config, DeleteMode};
pub use domain::{ContactField, ValidationError};
pub use error::{ConfigError, ConfigResult, ValidationResult};
pub use models::{Contact, ContactDetails, ContactUpdate};
pub use reports::{CityStateCounts, CityStateGroups, Listing};
