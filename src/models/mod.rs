//! Data models for the address book.
//!
//! A [`Record`] aggregates one name and its validated phones; an
//! [`AddressBook`] maps names to records. A [`PhoneBook`] keeps one
//! unvalidated phone string per name.

pub mod address_book;
pub mod phone_book;
pub mod record;

pub use address_book::{AddressBook, NO_CONTACTS};
pub use phone_book::PhoneBook;
pub use record::Record;
