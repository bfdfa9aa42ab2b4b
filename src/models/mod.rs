//! Data models for the contact book.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Page};
pub use record::{Record, BIRTHDAY_NOT_SPECIFIED};
