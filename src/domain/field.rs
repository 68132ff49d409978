//! Field trait shared by the scalar value holders.

use std::fmt;

/// A simple scalar value holder that can always be rendered as text.
///
/// [`Name`](super::Name) and [`Phone`](super::Phone) are the two fields a
/// contact record is built from.
pub trait Field: fmt::Display {
    /// Get the raw value as a string slice.
    fn value(&self) -> &str;
}
