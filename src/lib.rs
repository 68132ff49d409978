//! Address Book Assistant - a command-line bot that keeps contacts in memory.
//!
//! The assistant reads one command per line, stores contact names with
//! validated phone numbers, and answers with plain-text replies.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) behind the `Field` trait
//! - **models**: `Record` and `AddressBook` (validated), `PhoneBook` (free-form phones, used by the CLI)
//! - **repositories**: The `ContactStore` abstraction and its address-book implementation
//! - **cli**: Line parsing, command handlers and the REPL session
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use cli::{Session, SessionState};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::{AddressBook, PhoneBook, Record};
pub use repositories::{ContactEntry, ContactStore};
