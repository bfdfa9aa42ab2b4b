//! Contact Book - an interactive console address book.
//!
//! This library provides validated contact records, an address book keyed by
//! name with paginated iteration, and a line-oriented command dispatcher that
//! turns free-text input into operations and display text.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone number, birthday)
//! - **models**: Records and the address book
//! - **dispatcher**: Command table, handlers, and the session state machine
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use dispatcher::{Command, Outcome, Session, SessionState};
pub use domain::{Birthday, FieldValue, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, Page, Record};
