//! Domain value objects and types.
//!
//! This module contains the scalar fields a contact is made of. Value
//! objects validate at construction time so an invalid phone number can
//! never be represented in the address book.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
