//! Interactive session: the address book plus the running/terminated state.

use super::command::{self, ParsedCommand};
use super::handlers::Invocation;
use crate::config::Config;
use crate::error::BookResult;
use crate::models::AddressBook;
use tracing::{debug, warn};

/// Reply to a line that matched no command.
pub const INVALID_COMMAND: &str = "Invalid command. Type 'help' for a list of commands.";

/// Whether the session still accepts commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show; the session keeps running.
    Reply(String),
    /// Farewell text; the session is over.
    Terminate(String),
}

impl Outcome {
    /// The text to display.
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Terminate(text) => text,
        }
    }

    /// Whether this outcome ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminate(_))
    }
}

/// A single-user session owning its address book.
#[derive(Debug, Clone)]
pub struct Session {
    book: AddressBook,
    page_size: usize,
    state: SessionState,
}

impl Session {
    /// Create a session with an empty address book.
    ///
    /// `page_size` is used by `show page`; zero is rejected when that
    /// command runs.
    pub fn new(page_size: usize) -> Self {
        Self::with_book(AddressBook::new(), page_size)
    }

    /// Create a session around an existing address book.
    pub fn with_book(book: AddressBook, page_size: usize) -> Self {
        Self {
            book,
            page_size,
            state: SessionState::Running,
        }
    }

    /// Create a session configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_size)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Parse `raw_line` and run the matching handler.
    ///
    /// Unknown commands are an ordinary [`Outcome::Reply`]. Validation
    /// failures, missing phones, wrong argument counts and malformed
    /// arguments come back as errors.
    /// A terminated session answers every line with the farewell again.
    pub fn dispatch(&mut self, raw_line: &str) -> BookResult<Outcome> {
        if self.state == SessionState::Terminated {
            return Ok(Outcome::Terminate("Good bye!".to_string()));
        }

        let line = command::normalize(raw_line);
        let Some(ParsedCommand { spec, args }) = command::parse(&line) else {
            debug!("No command matches {:?}", line);
            return Ok(Outcome::Reply(INVALID_COMMAND.to_string()));
        };

        debug!(command = ?spec.command, args = args.len(), "Dispatching command");

        let invocation = Invocation {
            args: &args,
            usage: spec.usage,
            page_size: self.page_size,
        };
        if !spec.accepts(args.len()) {
            return Err(invocation.usage_error());
        }

        let outcome = (spec.handler)(&mut self.book, &invocation)?;
        if outcome.is_terminal() {
            self.state = SessionState::Terminated;
        }
        Ok(outcome)
    }

    /// Like [`Session::dispatch`], with errors rendered as reply text.
    pub fn respond(&mut self, raw_line: &str) -> Outcome {
        match self.dispatch(raw_line) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Command {:?} rejected: {}", raw_line.trim(), e);
                Outcome::Reply(e.to_string())
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
