//! The address book collection.

use super::outcome::{AddOutcome, DeleteOutcome, EditOutcome};
use super::sort::SortKey;
use crate::config::{Config, DeleteMode};
use crate::models::{Contact, ContactUpdate};
use crate::reports::{CityStateCounts, CityStateGroups, Listing};
use serde::Serialize;

/// An ordered collection of contacts.
///
/// Contacts keep insertion order until one of the sort methods is called.
/// No two contacts share the same `(first_name, last_name)` key.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Contact, ContactDetails};
///
/// let mut book = AddressBook::new();
/// let contact = Contact::new(ContactDetails::new(
///     "Raksha", "Malviya", "Piplani", "Bhopal", "Madhya Pradesh",
///     "400001", "9876543210", "rak07@example.com",
/// )).unwrap();
///
/// assert!(book.add(contact.clone()).is_added());
/// assert!(!book.add(contact).is_added());
/// assert_eq!(book.count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    #[serde(skip)]
    delete_mode: DeleteMode,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty address book using the settings in `config`.
    pub fn with_config(config: &Config) -> Self {
        Self::with_delete_mode(config.delete_mode)
    }

    /// Create an empty address book with the given first-name delete mode.
    pub fn with_delete_mode(delete_mode: DeleteMode) -> Self {
        Self {
            contacts: Vec::new(),
            delete_mode,
        }
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    /// Append `contact` unless its key is already taken.
    pub fn add(&mut self, contact: Contact) -> AddOutcome {
        let (first, last) = contact.key();
        if self.get(first, last).is_some() {
            tracing::warn!(
                first_name = %first,
                last_name = %last,
                "Duplicate contact, not added"
            );
            return AddOutcome::Duplicate;
        }

        tracing::info!(name = %contact.full_name(), "Contact added");
        self.contacts.push(contact);
        AddOutcome::Added
    }

    /// Edit the first contact whose first name is `first_name`.
    ///
    /// The update is overlaid on the existing contact and the result is fully
    /// re-validated. On any rejection the book is left unchanged.
    pub fn edit(&mut self, first_name: &str, update: &ContactUpdate) -> EditOutcome {
        match self.position_by_first_name(first_name) {
            Some(position) => self.replace_at(position, update),
            None => {
                tracing::info!(first_name = %first_name, "Contact not found, nothing edited");
                EditOutcome::NotFound
            }
        }
    }

    /// Edit the contact whose key is exactly `(first_name, last_name)`.
    pub fn edit_by_key(
        &mut self,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> EditOutcome {
        match self.position(first_name, last_name) {
            Some(position) => self.replace_at(position, update),
            None => {
                tracing::info!(
                    first_name = %first_name,
                    last_name = %last_name,
                    "Contact not found, nothing edited"
                );
                EditOutcome::NotFound
            }
        }
    }

    fn replace_at(&mut self, position: usize, update: &ContactUpdate) -> EditOutcome {
        let current = &self.contacts[position];

        let replacement = match update.apply(current) {
            Ok(contact) => contact,
            Err(err) => {
                tracing::warn!(name = %current.full_name(), error = %err, "Update failed");
                return EditOutcome::Invalid(err);
            }
        };

        let (first, last) = replacement.key();
        let collides = self
            .contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != position && c.has_key(first, last));
        if collides {
            tracing::warn!(
                first_name = %first,
                last_name = %last,
                "Update would duplicate an existing contact"
            );
            return EditOutcome::Duplicate;
        }

        tracing::info!(
            from = %current.full_name(),
            to = %replacement.full_name(),
            "Contact updated"
        );
        self.contacts[position] = replacement;
        EditOutcome::Updated { position }
    }

    /// Delete contacts whose first name is `first_name`.
    ///
    /// With [`DeleteMode::All`] every match is removed, with
    /// [`DeleteMode::First`] only the earliest one.
    pub fn delete(&mut self, first_name: &str) -> DeleteOutcome {
        let removed = match self.delete_mode {
            DeleteMode::All => {
                let before = self.contacts.len();
                self.contacts.retain(|c| c.first_name() != first_name);
                before - self.contacts.len()
            }
            DeleteMode::First => match self.position_by_first_name(first_name) {
                Some(position) => {
                    self.contacts.remove(position);
                    1
                }
                None => 0,
            },
        };

        Self::delete_outcome(removed, first_name, None)
    }

    /// Delete the contact whose key is exactly `(first_name, last_name)`.
    pub fn delete_by_key(&mut self, first_name: &str, last_name: &str) -> DeleteOutcome {
        let removed = match self.position(first_name, last_name) {
            Some(position) => {
                self.contacts.remove(position);
                1
            }
            None => 0,
        };

        Self::delete_outcome(removed, first_name, Some(last_name))
    }

    fn delete_outcome(
        removed: usize,
        first_name: &str,
        last_name: Option<&str>,
    ) -> DeleteOutcome {
        if removed == 0 {
            tracing::info!(
                first_name = %first_name,
                last_name = last_name,
                "Contact not found, nothing deleted"
            );
            DeleteOutcome::NotFound
        } else {
            tracing::info!(
                first_name = %first_name,
                last_name = last_name,
                removed = removed,
                "Contact deleted"
            );
            DeleteOutcome::Deleted(removed)
        }
    }

    /// Look up a contact by its key.
    pub fn get(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.has_key(first_name, last_name))
    }

    fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.has_key(first_name, last_name))
    }

    fn position_by_first_name(&self, first_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.first_name() == first_name)
    }

    /// All contacts in current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Number of contacts held.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts whose city is `city` or whose state is `state`, in book order.
    pub fn search_by_city_or_state(&self, city: &str, state: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.city() == city || c.state() == state)
            .collect()
    }

    pub fn search_by_city(&self, city: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.city() == city).collect()
    }

    pub fn search_by_state(&self, state: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.state() == state).collect()
    }

    /// Group contacts by city and, separately, by state.
    pub fn group_by_city_or_state(&self) -> CityStateGroups<'_> {
        CityStateGroups::from_contacts(&self.contacts)
    }

    /// Count contacts per city and per state.
    pub fn count_by_city_or_state(&self) -> CityStateCounts {
        CityStateCounts::from_contacts(&self.contacts)
    }

    /// Stable in-place sort on `key`.
    pub fn sort_by(&mut self, key: SortKey) {
        self.contacts.sort_by(|a, b| key.compare(a, b));
        tracing::debug!(key = ?key, count = self.contacts.len(), "Contacts sorted");
    }

    pub fn sort_by_name(&mut self) {
        self.sort_by(SortKey::Name);
    }

    pub fn sort_by_city(&mut self) {
        self.sort_by(SortKey::City);
    }

    pub fn sort_by_state(&mut self) {
        self.sort_by(SortKey::State);
    }

    pub fn sort_by_zip(&mut self) {
        self.sort_by(SortKey::Zip);
    }

    /// Snapshot of every contact for display.
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(&self.contacts)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
