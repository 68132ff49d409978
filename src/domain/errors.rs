//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhone(String),
}

impl ValidationError {
    /// The rejected raw value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidPhone(phone) => phone,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must contain exactly 10 digits."),
        }
    }
}

impl std::error::Error for ValidationError {}
