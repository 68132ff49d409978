use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::{ContactEntry, ContactStore};
use tracing::debug;

/// Contact store backed by an in-memory [`AddressBook`].
///
/// Every mutation builds or edits a validated [`Record`]; an invalid phone
/// leaves the book unchanged.
impl ContactStore for AddressBook {
    fn add(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        let mut record = Record::new(name);
        record.add_phone(phone)?;
        let replaced = self.find(name).is_some();
        self.add_record(record);
        debug!(contact = name, replaced, "Stored contact");
        Ok(())
    }

    fn update(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        let record = self
            .find_mut(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        record.replace_phones(phone)?;
        debug!(contact = name, "Updated contact");
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<ContactEntry> {
        self.find(name).map(entry)
    }

    fn list(&self) -> Vec<ContactEntry> {
        self.records().map(entry).collect()
    }

    fn delete(&mut self, name: &str) -> ContactResult<()> {
        match AddressBook::delete(self, name) {
            Some(_) => {
                debug!(contact = name, "Deleted contact");
                Ok(())
            }
            None => Err(ContactError::ContactNotFound(name.to_string())),
        }
    }
}

fn entry(record: &Record) -> ContactEntry {
    ContactEntry {
        name: record.name().to_string(),
        phones: record.phones_joined(),
    }
}
