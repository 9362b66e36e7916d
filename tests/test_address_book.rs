//! Tests for address book collection operations.
//!
//! These tests validate:
//! - Duplicate keys are rejected without changing the book
//! - Edits overlay only the given fields and never corrupt on failure
//! - Deletes remove only matching entries
//! - Search, grouping, counting and sorting follow book order

use address_book::{
    AddOutcome, AddressBook, Contact, ContactField, ContactUpdate, DeleteMode, DeleteOutcome,
    EditOutcome,
};

mod fixtures;
use fixtures::*;

#[test]
fn test_add_new_key_increments_count() {
    let mut book = book_with(vec![raksha()]);
    let before: Vec<Contact> = book.contacts().to_vec();

    assert_eq!(book.add(nisha()), AddOutcome::Added);
    assert_eq!(book.count(), before.len() + 1);
    assert_eq!(&book.contacts()[..before.len()], before.as_slice());
    assert_eq!(book.contacts().last(), Some(&nisha()));
}

#[test]
fn test_add_duplicate_key_is_rejected() {
    let mut book = book_with(vec![raksha(), nisha()]);
    let duplicate = sample_contact("Raksha", "Malviya", "Boston", "Uttar Pradesh");

    assert_eq!(book.add(duplicate), AddOutcome::Duplicate);
    assert_eq!(book.count(), 2);
    assert_eq!(book.get("Raksha", "Malviya"), Some(&raksha()));
}

#[test]
fn test_edit_missing_contact_changes_nothing() {
    let mut book = book_with(vec![raksha(), nisha()]);
    let before = book.clone();

    let update = ContactUpdate {
        city: Some("Amsterdam".to_string()),
        ..Default::default()
    };
    assert_eq!(book.edit("Priya", &update), EditOutcome::NotFound);
    assert_eq!(book, before);
}

#[test]
fn test_edit_changes_only_given_fields() {
    let mut book = book_with(vec![raksha(), nisha()]);
    let update = ContactUpdate {
        city: Some("Amsterdam".to_string()),
        phone: Some("8000000000".to_string()),
        ..Default::default()
    };

    assert_eq!(book.edit("Raksha", &update), EditOutcome::Updated { position: 0 });

    let edited = &book.contacts()[0];
    let original = raksha();
    assert_eq!(edited.city(), "Amsterdam");
    assert_eq!(edited.phone(), "8000000000");
    assert_eq!(edited.first_name(), original.first_name());
    assert_eq!(edited.last_name(), original.last_name());
    assert_eq!(edited.address(), original.address());
    assert_eq!(edited.state(), original.state());
    assert_eq!(edited.zip(), original.zip());
    assert_eq!(edited.email(), original.email());
    assert_eq!(book.contacts()[1], nisha());
}

#[test]
fn test_invalid_edit_keeps_original_intact() {
    let mut book = book_with(vec![raksha()]);
    let update = ContactUpdate {
        city: Some("NY".to_string()),
        ..Default::default()
    };

    match book.edit("Raksha", &update) {
        EditOutcome::Invalid(err) => assert_eq!(err.field(), ContactField::City),
        other => panic!("Expected Invalid outcome, got: {:?}", other),
    }
    assert_eq!(book.contacts(), &[raksha()]);
}

#[test]
fn test_delete_removes_only_matches() {
    let mut book = book_with(vec![raksha(), nisha(), ashi()]);

    assert_eq!(book.delete("Nisha"), DeleteOutcome::Deleted(1));
    assert_eq!(book.contacts(), &[raksha(), ashi()]);
    assert_eq!(book.delete("Nisha"), DeleteOutcome::NotFound);
    assert_eq!(book.count(), 2);
}

#[test]
fn test_delete_by_first_name_respects_mode() {
    let namesake = sample_contact("Raksha", "Singh", "Boston", "Uttar Pradesh");

    let mut all = book_with(vec![raksha(), nisha(), namesake.clone()]);
    assert_eq!(all.delete("Raksha"), DeleteOutcome::Deleted(2));
    assert_eq!(all.contacts(), &[nisha()]);

    let mut first = AddressBook::with_delete_mode(DeleteMode::First);
    for c in [raksha(), nisha(), namesake.clone()] {
        let _ = first.add(c);
    }
    assert_eq!(first.delete("Raksha"), DeleteOutcome::Deleted(1));
    assert_eq!(first.contacts(), &[nisha(), namesake]);
}

#[test]
fn test_search_by_city_or_state_deduplicates() {
    let book = book_with(vec![
        raksha(),
        ashi(),
        sample_contact("Rak", "Malviya", "Boston", "Madhya Pradesh"),
        sample_contact("Meera", "Joshi", "Bhopal", "Kerala"),
    ]);

    let found = book.search_by_city_or_state("Bhopal", "Madhya Pradesh");
    let names: Vec<String> = found.iter().map(|c| c.full_name()).collect();
    assert_eq!(names, vec!["Raksha Malviya", "Rak Malviya", "Meera Joshi"]);
}

#[test]
fn test_sort_by_zip_is_textual() {
    let mut book = book_with(vec![
        contact_with_zip("Raksha", "Malviya", "400001"),
        contact_with_zip("Nisha", "Kumari", "099999"),
        contact_with_zip("Ashi", "Singh", "100000"),
    ]);

    book.sort_by_zip();
    let zips: Vec<&str> = book.iter().map(|c| c.zip()).collect();
    assert_eq!(zips, vec!["099999", "100000", "400001"]);
}

#[test]
fn test_group_and_count_same_city() {
    let book = book_with(vec![raksha(), nisha()]);

    let groups = book.group_by_city_or_state();
    assert_eq!(groups.by_city.len(), 1);
    assert_eq!(groups.city("Bhopal"), &[&raksha(), &nisha()]);
    assert_eq!(groups.state("Madhya Pradesh"), &[&raksha(), &nisha()]);

    let counts = book.count_by_city_or_state();
    assert_eq!(counts.city("Bhopal"), 2);
    assert_eq!(counts.state("Madhya Pradesh"), 2);
}

#[test]
fn test_empty_book_reports() {
    let book = AddressBook::new();
    assert_eq!(book.count(), 0);
    assert!(book.search_by_city_or_state("Bhopal", "Madhya Pradesh").is_empty());
    assert!(book.group_by_city_or_state().by_city.is_empty());
    assert!(book.count_by_city_or_state().by_state.is_empty());
    assert!(book.listing().is_empty());
}
