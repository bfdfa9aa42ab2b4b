//! Shared capability of validated field values.

use super::errors::ValidationError;

/// A scalar value that is validated before it is ever stored.
///
/// Implementors guarantee that every instance holds a value that passed
/// validation. [`FieldValue::set_value`] validates the candidate first and
/// only then replaces the current value, so a rejected update leaves the
/// field untouched.
pub trait FieldValue: Sized {
    /// Validate `value` and build the field from it.
    fn try_new(value: String) -> Result<Self, ValidationError>;

    /// Get the stored value as a string slice.
    fn as_str(&self) -> &str;

    /// Replace the stored value with `value` if it is valid.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the concrete kind and keeps the
    /// previous value in place.
    fn set_value(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let candidate = Self::try_new(value.into())?;
        *self = candidate;
        Ok(())
    }
}
