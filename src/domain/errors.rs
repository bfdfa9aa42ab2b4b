//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `DD-MM-YYYY` calendar date.
    InvalidBirthday(String),

    /// The provided birthday lies in the future.
    FutureBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number format: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday format (DD-MM-YYYY): {}", date)
            }
            Self::FutureBirthday(date) => {
                write!(f, "Birthday must not be in the future: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
