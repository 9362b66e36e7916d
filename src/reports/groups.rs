//! Grouping and counting by city and state.

use crate::models::Contact;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Contacts partitioned by city and, independently, by state.
///
/// Keys iterate in sorted order; inside each group contacts keep address
/// book order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStateGroups<'a> {
    pub by_city: BTreeMap<&'a str, Vec<&'a Contact>>,
    pub by_state: BTreeMap<&'a str, Vec<&'a Contact>>,
}

impl<'a> CityStateGroups<'a> {
    pub fn from_contacts(contacts: &'a [Contact]) -> Self {
        let mut groups = Self::default();
        for contact in contacts {
            groups.by_city.entry(contact.city()).or_default().push(contact);
            groups
                .by_state
                .entry(contact.state())
                .or_default()
                .push(contact);
        }
        groups
    }

    /// Contacts living in `city`.
    pub fn city(&self, city: &str) -> &[&'a Contact] {
        self.by_city.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Contacts living in `state`.
    pub fn state(&self, state: &str) -> &[&'a Contact] {
        self.by_state.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reduce the groups to their sizes.
    pub fn counts(&self) -> CityStateCounts {
        CityStateCounts {
            by_city: sizes(&self.by_city),
            by_state: sizes(&self.by_state),
        }
    }
}

fn sizes(groups: &BTreeMap<&str, Vec<&Contact>>) -> BTreeMap<String, usize> {
    groups
        .iter()
        .map(|(key, members)| ((*key).to_string(), members.len()))
        .collect()
}

impl fmt::Display for CityStateGroups<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_groups(f, "Persons by City", &self.by_city)?;
        write_groups(f, "Persons by State", &self.by_state)
    }
}

fn write_groups(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    groups: &BTreeMap<&str, Vec<&Contact>>,
) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    for (key, members) in groups {
        let names: Vec<String> = members.iter().map(|c| c.full_name()).collect();
        writeln!(f, "  {} ({}): {}", key, members.len(), names.join(", "))?;
    }
    Ok(())
}

/// Number of contacts per city and per state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStateCounts {
    pub by_city: BTreeMap<String, usize>,
    pub by_state: BTreeMap<String, usize>,
}

impl CityStateCounts {
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut counts = Self::default();
        for contact in contacts {
            *counts.by_city.entry(contact.city().to_string()).or_insert(0) += 1;
            *counts.by_state.entry(contact.state().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Count for `city`, zero if absent.
    pub fn city(&self, city: &str) -> usize {
        self.by_city.get(city).copied().unwrap_or(0)
    }

    /// Count for `state`, zero if absent.
    pub fn state(&self, state: &str) -> usize {
        self.by_state.get(state).copied().unwrap_or(0)
    }
}

impl fmt::Display for CityStateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count by City:")?;
        for (city, count) in &self.by_city {
            writeln!(f, "  {}: {}", city, count)?;
        }
        writeln!(f, "Count by State:")?;
        for (state, count) in &self.by_state {
            writeln!(f, "  {}: {}", state, count)?;
        }
        Ok(())
    }
}
