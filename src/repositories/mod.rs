//! Contact storage behind the [`ContactStore`] abstraction.

mod address_book_store;
mod phone_book_store;
mod traits;

pub use traits::{ContactEntry, ContactStore};
