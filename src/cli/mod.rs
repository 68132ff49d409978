//! Command-line front end.
//!
//! [`parse`] turns a line into a command and arguments, [`handlers`]
//! implement each command against a [`ContactStore`](crate::repositories::ContactStore),
//! and [`session`] runs the prompt loop.

pub mod handlers;
pub mod parse;
pub mod session;

pub use parse::{parse_input, Command, ParsedInput};
pub use session::{Session, SessionState};
