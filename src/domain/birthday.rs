//! Birthday value object.

use super::errors::ValidationError;
use super::field::FieldValue;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Day-month-year layout accepted for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A validated birthday in `DD-MM-YYYY` form.
///
/// The entered text is kept for display while the parsed calendar date
/// drives the day arithmetic. A birthday can never lie in the future
/// relative to the day it was validated on.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("01-06-1990").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 5, 30).unwrap();
/// assert_eq!(birthday.days_until(today).unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validated against the local current date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for malformed input or an
    /// impossible calendar date, and `ValidationError::FutureBirthday` for a
    /// date after today.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_new(value.into())
    }

    /// Create a new Birthday, treating `today` as the current date.
    pub fn new_as_of(value: impl Into<String>, today: NaiveDate) -> Result<Self, ValidationError> {
        let value = value.into();

        if !BIRTHDAY_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        let date = match NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
            Ok(date) => date,
            Err(_) => return Err(ValidationError::InvalidBirthday(value)),
        };

        if date > today {
            return Err(ValidationError::FutureBirthday(value));
        }

        Ok(Self { raw: value, date })
    }

    /// Get the birthday as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date this birthday is celebrated on in `year`.
    ///
    /// Feb 29 birthdays fall on Mar 1 in non-leap years. Returns `None` only
    /// when `year` is outside the supported calendar range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// Days from `reference` until the next occurrence of this birthday.
    ///
    /// An occurrence on `reference` itself counts as zero days.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if no occurrence can be
    /// represented as a calendar date.
    pub fn days_until(&self, reference: NaiveDate) -> Result<i64, ValidationError> {
        let year = reference.year();
        let unrepresentable = || ValidationError::InvalidBirthday(self.raw.clone());

        let mut next = self.occurrence_in(year).ok_or_else(unrepresentable)?;
        if next < reference {
            next = self.occurrence_in(year + 1).ok_or_else(unrepresentable)?;
        }

        Ok((next - reference).num_days())
    }
}

impl FieldValue for Birthday {
    fn try_new(value: String) -> Result<Self, ValidationError> {
        Self::new_as_of(value, Local::now().date_naive())
    }

    fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
