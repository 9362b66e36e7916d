//! The address book and its operation outcomes.

mod address_book;
mod outcome;
mod sort;

pub use address_book::AddressBook;
pub use outcome::{AddOutcome, DeleteOutcome, EditOutcome};
pub use sort::{collate, SortKey};
