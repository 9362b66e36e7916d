//! Structured reports over an address book.
//!
//! Reports are plain data: they serialize with serde and render as text
//! through `Display`. Neither rendering is a stable format.

mod groups;
mod listing;

pub use groups::{CityStateCounts, CityStateGroups};
pub use listing::Listing;

use serde::Serialize;

/// Render any report as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
