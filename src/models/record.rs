//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker rendered in place of a missing birthday.
pub const BIRTHDAY_NOT_SPECIFIED: &str = "Not specified";

/// A contact: a name, its phone numbers, and an optional birthday.
///
/// The name is the record's identity and never changes. Phones keep their
/// insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is empty or the birthday is
    /// malformed or in the future.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::new).transpose()?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    /// Build a record from already validated parts.
    pub fn from_parts(name: Name, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday,
        }
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one was given.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(index) = self.position_of(number) {
            self.phones.remove(index);
        }
    }

    /// Replace `old` with `new`, moving the new number to the end of the list.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if `old` is not one of the record's phones
    /// - `BookError::Validation` if `new` is not a valid phone number
    ///
    /// The phone list is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::NotFound(format!("phone number {}", old)))?;
        let replacement = PhoneNumber::new(new)?;

        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// Discard every phone and keep only `number`.
    ///
    /// Nothing changes if `number` is invalid.
    pub fn replace_phones(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Look up the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == number)
    }

    /// Days until the next birthday, counted from `reference` (default: today).
    ///
    /// Returns `Ok(None)` when the record has no birthday.
    pub fn days_to_birthday(
        &self,
        reference: Option<NaiveDate>,
    ) -> Result<Option<i64>, ValidationError> {
        let Some(birthday) = &self.birthday else {
            return Ok(None);
        };

        let reference = reference.unwrap_or_else(|| Local::now().date_naive());
        birthday.days_until(reference).map(Some)
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = self
            .birthday
            .as_ref()
            .map_or(BIRTHDAY_NOT_SPECIFIED, Birthday::as_str);

        write!(
            f,
            "Name: {}, Phones: [{}], Birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("alice", Some("01-06-1990")).unwrap();
        assert_eq!(record.name().as_str(), "alice");
        assert!(record.phones().is_empty());
        assert_eq!(record.birthday().map(Birthday::as_str), Some("01-06-1990"));
    }

    #[test]
    fn test_record_new_rejects_bad_fields() {
        assert_eq!(Record::new("", None), Err(ValidationError::EmptyName));
        assert!(matches!(
            Record::new("alice", Some("1990-06-01")),
            Err(ValidationError::InvalidBirthday(_))
        ));
        assert!(matches!(
            Record::new("alice", Some("01-01-9999")),
            Err(ValidationError::FutureBirthday(_))
        ));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("alice", None).unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(
            phone_values(&record),
            vec!["1111111111", "2222222222", "1111111111"]
        );
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = Record::new("alice", None).unwrap();
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = Record::new("alice", None).unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.remove_phone("1111111111");
        assert_eq!(phone_values(&record), vec!["2222222222", "1111111111"]);

        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_moves_new_number_to_end() {
        let mut record = Record::new("alice", None).unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phone_values(&record), vec!["2222222222", "3333333333"]);
        assert!(record.find_phone("1111111111").is_none());
    }

    #[test]
    fn test_edit_phone_missing_old_is_not_found() {
        let mut record = Record::new("alice", None).unwrap();
        record.add_phone("1111111111").unwrap();

        let result = record.edit_phone("2222222222", "3333333333");
        assert!(matches!(result, Err(BookError::NotFound(_))));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_phones_unchanged() {
        let mut record = Record::new("alice", None).unwrap();
        record.add_phone("1111111111").unwrap();

        let result = record.edit_phone("1111111111", "12");
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_replace_phones() {
        let mut record = Record::new("alice", None).unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        assert!(record.replace_phones("bad").is_err());
        assert_eq!(record.phones().len(), 2);

        record.replace_phones("3333333333").unwrap();
        assert_eq!(phone_values(&record), vec!["3333333333"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("alice", None).unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(
            record.find_phone("1111111111").map(PhoneNumber::as_str),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_days_to_birthday() {
        let record = Record::new("alice", Some("01-06-1990")).unwrap();
        assert_eq!(record.days_to_birthday(Some(ymd(2024, 5, 31))), Ok(Some(1)));
        assert_eq!(record.days_to_birthday(Some(ymd(2024, 6, 2))), Ok(Some(364)));

        let today = record.days_to_birthday(None).unwrap().unwrap();
        assert!((0..=366).contains(&today));
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::new("bob", None).unwrap();
        assert_eq!(record.days_to_birthday(Some(ymd(2024, 1, 1))), Ok(None));
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("alice", Some("01-06-1990")).unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: alice, Phones: [1234567890, 0987654321], Birthday: 01-06-1990"
        );

        let record = Record::new("bob", None).unwrap();
        assert_eq!(
            record.to_string(),
            "Name: bob, Phones: [], Birthday: Not specified"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("alice", Some("01-06-1990")).unwrap();
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "alice",
                "phones": ["1234567890"],
                "birthday": "01-06-1990"
            })
        );

        let parsed: Record = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);

        let bad = serde_json::json!({ "name": "bob", "phones": ["12"] });
        assert!(serde_json::from_value::<Record>(bad).is_err());
    }
}
