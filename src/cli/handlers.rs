//! Command handlers.
//!
//! Each handler works against a [`ContactStore`] and returns a tagged
//! [`CommandResult`]: `Ok` carries the reply text, `Err` carries one of the
//! [`CommandError`] tags whose display text is the reply.

use crate::error::{CommandError, CommandResult, ContactError};
use crate::models::NO_CONTACTS;
use crate::repositories::ContactStore;

pub const GREETING: &str = "How can i halp you?";
pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const CONTACTS_NOT_FOUND: &str = "Contacts not found.";

/// Reply to `hello`.
pub fn hello() -> CommandResult {
    Ok(GREETING.to_string())
}

/// `add <name> <phone>`: store the contact, overwriting an existing one.
pub fn add_contact(args: &[String], store: &mut dyn ContactStore) -> CommandResult {
    let [name, phone] = args else {
        return Err(CommandError::ArgCount);
    };
    store.add(&name.to_lowercase(), phone)?;
    Ok(CONTACT_ADDED.to_string())
}

/// `change <name> <phone>`: replace the phone of an existing contact.
pub fn change_contact(args: &[String], store: &mut dyn ContactStore) -> CommandResult {
    let [name, phone] = args else {
        return Err(CommandError::ArgCount);
    };
    match store.update(&name.to_lowercase(), phone) {
        Ok(()) => Ok(CONTACT_UPDATED.to_string()),
        Err(ContactError::ContactNotFound(_)) => Ok(CONTACTS_NOT_FOUND.to_string()),
        Err(e) => Err(e.into()),
    }
}

/// `phone <name>`: show the phones of a contact. Extra arguments are ignored.
pub fn show_phone(args: &[String], store: &dyn ContactStore) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArg)?;
    Ok(store
        .lookup(&name.to_lowercase())
        .map(|entry| entry.phones)
        .unwrap_or_else(|| CONTACTS_NOT_FOUND.to_string()))
}

/// `all`: one `name: phones` line per contact.
pub fn show_all(store: &dyn ContactStore) -> CommandResult {
    let entries = store.list();
    if entries.is_empty() {
        return Ok(NO_CONTACTS.to_string());
    }
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.phones))
        .collect();
    Ok(lines.join("\n"))
}

/// `delete <name>`: remove a contact. Extra arguments are ignored.
pub fn delete_contact(args: &[String], store: &mut dyn ContactStore) -> CommandResult {
    let name = args.first().ok_or(CommandError::MissingArg)?;
    match store.delete(&name.to_lowercase()) {
        Ok(()) => Ok(CONTACT_DELETED.to_string()),
        Err(ContactError::ContactNotFound(_)) => Ok(CONTACTS_NOT_FOUND.to_string()),
        Err(e) => Err(e.into()),
    }
}
