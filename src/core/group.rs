//! # Grouping Index
//!
//! Partitions the flat catalog into alphabetic buckets for the tree view.
//!
//! Ordering is plain code-point ordering everywhere: group keys ascend by
//! `char`, members ascend by `str::cmp`. That makes uppercase names sort
//! before lowercase ones inside a bucket (`"Pidgey" < "pikachu"`).

use std::collections::BTreeMap;
use std::fmt;

use crate::api::ListEntry;

/// One alphabetic bucket of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: char,
    pub members: Vec<ListEntry>,
}

/// A catalog entry that could not be placed in any group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntryError {
    pub locator: String,
}

impl fmt::Display for InvalidEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid catalog entry: empty name (locator {})", self.locator)
    }
}

impl std::error::Error for InvalidEntryError {}

/// Result of grouping: the buckets plus every entry that was skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grouping {
    pub groups: Vec<Group>,
    pub rejected: Vec<InvalidEntryError>,
}

/// Group key for a name: the uppercase form of its first character.
///
/// Characters whose uppercase form is more than one character (`ß` → `SS`)
/// key under themselves. Returns `None` for an empty name.
pub fn group_key(name: &str) -> Option<char> {
    let first = name.chars().next()?;
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => Some(single),
        _ => Some(first),
    }
}

/// Buckets `entries` by [`group_key`], sorting groups and members.
///
/// Entries with an empty name are left out and reported in
/// [`Grouping::rejected`]; nothing else is dropped or duplicated.
pub fn group(entries: impl IntoIterator<Item = ListEntry>) -> Grouping {
    let mut buckets: BTreeMap<char, Vec<ListEntry>> = BTreeMap::new();
    let mut rejected = Vec::new();

    for entry in entries {
        match group_key(&entry.name) {
            Some(key) => buckets.entry(key).or_default().push(entry),
            None => rejected.push(InvalidEntryError {
                locator: entry.locator,
            }),
        }
    }

    let groups = buckets
        .into_iter()
        .map(|(key, mut members)| {
            members.sort_by(|a, b| a.name.cmp(&b.name));
            Group { key, members }
        })
        .collect();

    Grouping { groups, rejected }
}
