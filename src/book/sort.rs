//! Sort keys and string collation.

use crate::models::Contact;
use std::cmp::Ordering;

/// The fields an address book can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// First name only; equal first names keep their order.
    Name,
    City,
    State,
    /// Zip compared as text, not as a number.
    Zip,
}

impl SortKey {
    /// Compare two contacts on this key.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            Self::Name => collate(a.first_name(), b.first_name()),
            Self::City => collate(a.city(), b.city()),
            Self::State => collate(a.state(), b.state()),
            Self::Zip => collate(a.zip(), b.zip()),
        }
    }
}

/// Locale-style string ordering.
///
/// Strings are compared case-insensitively first. When they differ only in
/// case, the lowercase form sorts first (`"bhopal" < "Bhopal" < "Boston"`).
/// Digit strings compare character by character, so `"10" < "2"`.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}
