//! Test fixtures and sample data.
//!
//! The sample people and places come from the address book demo: two
//! contacts in Bhopal, Madhya Pradesh and a couple in Boston.

#![allow(dead_code)]

use address_book::{AddressBook, Contact, ContactDetails};

/// Raw details for a contact with the usual demo address and phone.
pub fn details(first_name: &str, last_name: &str, city: &str, state: &str) -> ContactDetails {
    ContactDetails::new(
        first_name,
        last_name,
        "Piplani",
        city,
        state,
        "400001",
        "9876543210",
        format!("{}@example.com", first_name.to_lowercase()),
    )
}

/// A validated contact built from [`details`].
pub fn sample_contact(first_name: &str, last_name: &str, city: &str, state: &str) -> Contact {
    Contact::new(details(first_name, last_name, city, state)).expect("fixture must be valid")
}

/// A validated contact with a specific zip.
pub fn contact_with_zip(first_name: &str, last_name: &str, zip: &str) -> Contact {
    let mut details = details(first_name, last_name, "Bhopal", "Madhya Pradesh");
    details.zip = zip.to_string();
    Contact::new(details).expect("fixture must be valid")
}

pub fn raksha() -> Contact {
    Contact::new(ContactDetails::new(
        "Raksha",
        "Malviya",
        "Piplani",
        "Bhopal",
        "Madhya Pradesh",
        "400001",
        "9876543210",
        "rak07@example.com",
    ))
    .expect("fixture must be valid")
}

pub fn nisha() -> Contact {
    Contact::new(ContactDetails::new(
        "Nisha",
        "Kumari",
        "Piplani",
        "Bhopal",
        "Madhya Pradesh",
        "400001",
        "9876543210",
        "exa7654@example.com",
    ))
    .expect("fixture must be valid")
}

pub fn ashi() -> Contact {
    Contact::new(ContactDetails::new(
        "Ashi",
        "Singh",
        "Santa lane",
        "Boston",
        "Uttar Pradesh",
        "400001",
        "9876543210",
        "ashi@example.com",
    ))
    .expect("fixture must be valid")
}

/// An address book holding `contacts` in the given order.
pub fn book_with(contacts: Vec<Contact>) -> AddressBook {
    let mut book = AddressBook::new();
    for contact in contacts {
        assert!(book.add(contact).is_added(), "fixture contacts must be unique");
    }
    book
}
