//! Address book: a keyed collection of records.

use super::record::Record;
use crate::error::{BookError, BookResult};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A page of records produced by [`AddressBook::iterate`].
pub type Page<'a> = Vec<&'a Record>;

/// Records keyed by name, at most one per name.
///
/// Iteration follows the order in which names were first inserted.
/// Overwriting an existing name keeps its position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);

        if previous.is_none() {
            self.order.push(key);
        } else {
            debug!("Overwrote existing record for {}", key);
        }

        previous
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record called `name`, if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Split the current records into consecutive pages of `page_size`.
    ///
    /// Every page is full except possibly the last. The pages are computed
    /// when called; calling again re-reads the current records.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidArgument` if `page_size` is zero.
    pub fn iterate(&self, page_size: usize) -> BookResult<Vec<Page<'_>>> {
        if page_size == 0 {
            return Err(BookError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let snapshot: Vec<&Record> = self.iter().collect();
        Ok(snapshot
            .chunks(page_size)
            .map(|chunk| chunk.to_vec())
            .collect())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name, None).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a str> {
        records
            .into_iter()
            .map(|record| record.name().as_str())
            .collect()
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        let alice = record("alice", "1234567890");
        book.add_record(alice.clone());

        let found = book.find("alice").unwrap();
        assert_eq!(found.to_string(), alice.to_string());
        assert!(book.find("bob").is_none());
    }

    #[test]
    fn test_add_overwrites_without_merge() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1111111111"));
        book.add_record(record("bob", "2222222222"));

        let previous = book.add_record(record("alice", "3333333333"));
        assert!(previous.is_some());
        assert_eq!(book.len(), 2);
        assert_eq!(book.find("alice").unwrap().phones().len(), 1);
        assert_eq!(
            book.find("alice").unwrap().phones()[0].as_str(),
            "3333333333"
        );
        assert_eq!(names(book.iter()), vec!["alice", "bob"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", "1234567890"));

        assert!(book.delete("alice").is_some());
        assert!(book.find("alice").is_none());
        assert!(book.is_empty());

        assert!(book.delete("alice").is_none());
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["carol", "alice", "bob"] {
            book.add_record(record(name, "1234567890"));
        }
        book.delete("alice");
        book.add_record(record("alice", "1234567890"));

        assert_eq!(names(book.iter()), vec!["carol", "bob", "alice"]);
    }

    #[test]
    fn test_iterate_pages() {
        let mut book = AddressBook::new();
        for name in ["a", "b", "c", "d", "e"] {
            book.add_record(record(name, "1234567890"));
        }

        let pages = book.iterate(2).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(names(pages[0].iter().copied()), vec!["a", "b"]);
        assert_eq!(names(pages[1].iter().copied()), vec!["c", "d"]);
        assert_eq!(names(pages[2].iter().copied()), vec!["e"]);
    }

    #[test]
    fn test_iterate_is_restartable() {
        let mut book = AddressBook::new();
        book.add_record(record("a", "1234567890"));
        assert_eq!(book.iterate(10).unwrap().len(), 1);

        book.add_record(record("b", "1234567890"));
        let pages = book.iterate(10).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 2);
    }

    #[test]
    fn test_iterate_empty_book_yields_no_pages() {
        let book = AddressBook::new();
        assert!(book.iterate(3).unwrap().is_empty());
    }

    #[test]
    fn test_iterate_rejects_zero_page_size() {
        let book = AddressBook::new();
        assert!(matches!(
            book.iterate(0),
            Err(BookError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        let mut book = AddressBook::new();
        assert_eq!(book.to_string(), "");

        book.add_record(record("alice", "1111111111"));
        book.add_record(record("bob", "2222222222"));
        assert_eq!(
            book.to_string(),
            "Name: alice, Phones: [1111111111], Birthday: Not specified\n\
             Name: bob, Phones: [2222222222], Birthday: Not specified"
        );
    }

    proptest! {
        /// Property: pages cover every record exactly once, in order, and
        /// only the last page may be short.
        #[test]
        fn pages_cover_every_record_once(count in 0usize..40, page_size in 1usize..12) {
            let mut book = AddressBook::new();
            for i in 0..count {
                book.add_record(record(&format!("contact{}", i), "1234567890"));
            }

            let pages = book.iterate(page_size).unwrap();
            prop_assert_eq!(pages.len(), count.div_ceil(page_size));

            for (index, page) in pages.iter().enumerate() {
                if index + 1 < pages.len() {
                    prop_assert_eq!(page.len(), page_size);
                } else {
                    prop_assert!(!page.is_empty() && page.len() <= page_size);
                }
            }

            let flattened: Vec<&str> = pages
                .iter()
                .flat_map(|page| page.iter().map(|record| record.name().as_str()))
                .collect();
            prop_assert_eq!(flattened, names(book.iter()));
        }
    }
}
