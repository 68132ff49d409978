use crate::error::{ContactError, ContactResult};
use crate::models::PhoneBook;
use crate::repositories::traits::{ContactEntry, ContactStore};
use tracing::debug;

/// Contact store backed by a [`PhoneBook`].
///
/// Phones are taken as typed: no validation, no normalization.
impl ContactStore for PhoneBook {
    fn add(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        let replaced = self.set(name, phone);
        debug!(contact = name, replaced, "Stored contact");
        Ok(())
    }

    fn update(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        if self.get(name).is_none() {
            return Err(ContactError::ContactNotFound(name.to_string()));
        }
        self.set(name, phone);
        debug!(contact = name, "Updated contact");
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<ContactEntry> {
        self.get(name).map(|phone| ContactEntry {
            name: name.to_string(),
            phones: phone.to_string(),
        })
    }

    fn list(&self) -> Vec<ContactEntry> {
        self.iter()
            .map(|(name, phone)| ContactEntry {
                name: name.to_string(),
                phones: phone.to_string(),
            })
            .collect()
    }

    fn delete(&mut self, name: &str) -> ContactResult<()> {
        match self.remove(name) {
            Some(_) => {
                debug!(contact = name, "Deleted contact");
                Ok(())
            }
            None => Err(ContactError::ContactNotFound(name.to_string())),
        }
    }
}
