//! REPL session: owns the contact store and drives the read-dispatch-print loop.

use super::handlers;
use super::parse::{parse_input, Command, ParsedInput};
use crate::config::DEFAULT_PROMPT;
use crate::error::CommandResult;
use crate::repositories::ContactStore;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to assistant bot!";
pub const RETRY: &str = "Enter a valid command.";
pub const FAREWELL: &str = "Good bay!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Lifecycle of a session. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// One interactive session over a contact store.
pub struct Session<S: ContactStore> {
    store: S,
    state: SessionState,
    prompt: String,
}

impl<S: ContactStore> Session<S> {
    /// Create a running session with the default prompt.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: SessionState::Running,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate one input line and return the reply to print.
    ///
    /// `close` and `exit` move the session to [`SessionState::Stopped`].
    pub fn handle_line(&mut self, line: &str) -> String {
        if line.is_empty() {
            warn!("Rejected empty input");
            return RETRY.to_string();
        }
        let Some(input) = parse_input(line) else {
            warn!("Rejected input without a command");
            return RETRY.to_string();
        };
        debug!(command = %input.command, args = input.args.len(), "Dispatching command");

        match self.dispatch(&input) {
            Ok(reply) => reply,
            Err(e) => {
                debug!(command = %input.command, error = ?e, "Command rejected");
                e.to_string()
            }
        }
    }

    fn dispatch(&mut self, input: &ParsedInput) -> CommandResult {
        let args = input.args.as_slice();
        match input.kind() {
            Command::Exit => {
                self.state = SessionState::Stopped;
                Ok(FAREWELL.to_string())
            }
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add_contact(args, &mut self.store),
            Command::Change => handlers::change_contact(args, &mut self.store),
            Command::Phone => handlers::show_phone(args, &self.store),
            Command::All => handlers::show_all(&self.store),
            Command::Delete => handlers::delete_contact(args, &mut self.store),
            Command::Unknown => Ok(INVALID_COMMAND.to_string()),
        }
    }

    /// Run the loop until `close`/`exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `input` or writing to `output` fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", WELCOME)?;
        info!("Session started");

        let mut line = String::new();
        while self.state == SessionState::Running {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                info!("End of input, stopping session");
                self.state = SessionState::Stopped;
                writeln!(output)?;
                break;
            }

            let reply = self.handle_line(line.trim_end_matches(['\r', '\n']));
            writeln!(output, "{}", reply)?;
        }

        output.flush()?;
        info!("Session stopped");
        Ok(())
    }
}
