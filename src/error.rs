//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value was rejected by its validation rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A referenced record or phone number is absent where it is required
    #[error("Not found: {0}")]
    NotFound(String),

    /// A command or operation was invoked with malformed arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A command was given the wrong number of arguments; carries its usage line
    #[error("Invalid command. Use '{0}'")]
    Usage(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("phone 1234567890".to_string());
        assert_eq!(err.to_string(), "Not found: phone 1234567890");

        let err = BookError::InvalidArgument("page size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: page size must be positive");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert!(err.to_string().contains("CONTACT_BOOK_PAGE_SIZE"));
    }

    #[test]
    fn test_usage_error_display() {
        let err = BookError::Usage("edit <name> <new_phone>");
        assert_eq!(err.to_string(), "Invalid command. Use 'edit <name> <new_phone>'");
    }

    #[test]
    fn test_validation_error_converts_transparently() {
        let err: BookError = ValidationError::EmptyName.into();
        assert_eq!(err, BookError::Validation(ValidationError::EmptyName));
        assert_eq!(err.to_string(), "Name cannot be empty");
    }
}
