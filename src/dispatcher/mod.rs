//! Command dispatch.
//!
//! Maps free-text input lines onto address book operations and renders the
//! result as display text.

pub mod command;
pub mod handlers;
pub mod session;

pub use command::{Command, CommandSpec, ParsedCommand, COMMAND_TABLE};
pub use handlers::{Handler, Invocation};
pub use session::{Outcome, Session, SessionState, INVALID_COMMAND};
