//! Full listing of an address book.

use crate::models::Contact;
use serde::Serialize;
use std::fmt;

/// Every contact in address book order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listing<'a> {
    pub contacts: &'a [Contact],
}

impl<'a> Listing<'a> {
    pub fn new(contacts: &'a [Contact]) -> Self {
        Self { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address Book ({} contacts)", self.contacts.len())?;
        for (i, c) in self.contacts.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {} | {}, {}, {} {} | {} | {}",
                i + 1,
                c.full_name(),
                c.address(),
                c.city(),
                c.state(),
                c.zip(),
                c.phone(),
                c.email()
            )?;
        }
        Ok(())
    }
}
