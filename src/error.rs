//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating contact records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced phone is not on the record
    #[error("Phone {0} not found.")]
    PhoneNotFound(String),

    /// No contact is stored under the name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),
}

/// Outcome tags for a CLI command that did not succeed.
///
/// The display text of each variant is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("Give me name and phone please.")]
    ArgCount,

    /// A required positional argument is missing
    #[error("Enter the argument for the command")]
    MissingArg,

    /// The named contact does not exist
    #[error("Contact not found.")]
    NotFound,

    /// A supplied value failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl From<ContactError> for CommandError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(e) => CommandError::Invalid(e),
            ContactError::PhoneNotFound(_) | ContactError::ContactNotFound(_) => {
                CommandError::NotFound
            }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
