//! AddressBook model: the full set of contacts, keyed by name.

use super::record::Record;
use crate::domain::Field;
use std::collections::HashMap;
use std::fmt;

/// Text rendered for an address book without records.
pub const NO_CONTACTS: &str = "No contacts found.";

/// Mapping from contact name to [`Record`].
///
/// There is at most one record per name. Iteration follows the order in
/// which names were first added; overwriting a name keeps its position.
/// Keys are used as given, case folding is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, overwriting any existing one.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().value().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", NO_CONTACTS);
        }
        let lines: Vec<String> = self.records().map(|r| r.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
