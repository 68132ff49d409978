use crate::error::ContactResult;

/// A contact as the dispatcher sees it: the stored name and its phones
/// rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub name: String,
    pub phones: String,
}

/// Store for managing contacts.
///
/// The capability set the command dispatcher relies on. Whether phones are
/// validated is up to the implementation: [`AddressBook`](crate::models::AddressBook)
/// keeps validated records, [`PhoneBook`](crate::models::PhoneBook) accepts any
/// string.
pub trait ContactStore {
    /// Store `name` with `phone` as its only number, replacing any existing contact.
    fn add(&mut self, name: &str, phone: &str) -> ContactResult<()>;

    /// Replace the phones of an existing contact with `phone`.
    fn update(&mut self, name: &str, phone: &str) -> ContactResult<()>;

    /// Retrieve a single contact by name.
    fn lookup(&self, name: &str) -> Option<ContactEntry>;

    /// All contacts in insertion order.
    fn list(&self) -> Vec<ContactEntry>;

    /// Delete a contact.
    fn delete(&mut self, name: &str) -> ContactResult<()>;
}
