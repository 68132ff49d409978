//! PhoneBook model: one free-form phone string per contact name.

use std::collections::HashMap;

/// Mapping from contact name to a single phone string.
///
/// Phones are stored exactly as given, with no validation. This is the book
/// the interactive assistant runs on; [`AddressBook`](super::AddressBook)
/// is the validated model. Iteration follows the order in which names were
/// first added; overwriting a name keeps its position.
#[derive(Debug, Clone, Default)]
pub struct PhoneBook {
    phones: HashMap<String, String>,
    order: Vec<String>,
}

impl PhoneBook {
    /// Create an empty phone book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `phone` under `name`. Returns `true` if an existing phone was replaced.
    pub fn set(&mut self, name: &str, phone: &str) -> bool {
        let replaced = self
            .phones
            .insert(name.to_string(), phone.to_string())
            .is_some();
        if !replaced {
            self.order.push(name.to_string());
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.phones.get(name).map(String::as_str)
    }

    /// Remove the phone stored under `name`, if any.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let removed = self.phones.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// `(name, phone)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.phones.get(key).map(|p| (key.as_str(), p.as_str())))
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}
