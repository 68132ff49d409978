//! Record model: one contact's name plus its phone numbers.

use crate::domain::{Field, Name, Phone};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// A record always has a name. Phones keep insertion order and duplicates
/// are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the contact
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and append a phone.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` if the value is not a valid phone.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> ContactResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Absent values are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace `old` with `new`.
    ///
    /// The new value is validated before anything is removed, so a rejected
    /// edit leaves the phone list untouched. The replacement keeps the
    /// position of the old phone.
    ///
    /// # Errors
    ///
    /// - `ContactError::PhoneNotFound` if `old` is not on the record
    /// - `ContactError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> ContactResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        let replacement = Phone::new(new)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find a phone by exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    /// Drop every phone and store `phone` as the only one.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` and keeps the current phones if the
    /// value is invalid.
    pub fn replace_phones(&mut self, phone: impl Into<String>) -> ContactResult<()> {
        let phone = Phone::new(phone)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(|p| p.value())
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.value() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }
}
