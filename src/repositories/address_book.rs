//! In-memory address book.

use crate::models::{congratulation_date, Record, UpcomingBirthday};
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Days ahead the birthday query looks by default.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Records keyed by contact name, iterated in insertion order.
///
/// Lookups are linear; the book lives for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name in place.
    pub fn add(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing existing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns the removed record, or `None` if there was nothing to remove.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        debug!(name = %name, "Deleting record");
        Some(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays in the next [`DEFAULT_BIRTHDAY_WINDOW_DAYS`] days.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Contacts whose next birthday falls in `[today, today + days]`.
    ///
    /// Each row carries the congratulation date, which is the birthday moved
    /// off the weekend. Records without a birthday are skipped, and a window
    /// running past the last representable date yields no rows.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let Some(end) = today.checked_add_signed(Duration::days(i64::from(days))) else {
            debug!(today = %today, days = days, "Birthday window out of date range");
            return Vec::new();
        };

        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let next = record.birthday()?.next_occurrence(today)?;
                (next <= end)
                    .then(|| UpcomingBirthday::new(record.name().clone(), congratulation_date(next)))
            })
            .collect();

        debug!(
            today = %today,
            days = days,
            count = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::with_name(name).unwrap();
        if let Some(date) = birthday {
            record.add_birthday(date).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add(contact("Alice", None));
        assert_eq!(book.len(), 1);
        assert!(book.find("Alice").is_some());
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn test_add_replaces_in_place() {
        let mut book = AddressBook::new();
        book.add(contact("Alice", None));
        book.add(contact("Bob", None));
        book.add(contact("Alice", Some("01.01.1990")));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(book.find("Alice").unwrap().birthday().is_some());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add(contact("Alice", None));
        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 1);
        assert!(book.delete("Alice").is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn test_find_mut() {
        let mut book = AddressBook::new();
        book.add(contact("Alice", None));
        book.find_mut("Alice").unwrap().add_phone("1234567890").unwrap();
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_upcoming_skips_records_without_birthday() {
        let mut book = AddressBook::new();
        book.add(contact("NoBirthday", None));
        book.add(contact("Jane", Some("12.06.1990")));

        let upcoming = book.upcoming_birthdays(ymd(2024, 6, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name.as_str(), "Jane");
        assert_eq!(upcoming[0].congratulation_date, ymd(2024, 6, 12));
    }

    #[test]
    fn test_upcoming_near_max_date_is_empty() {
        let mut book = AddressBook::new();
        book.add(contact("Jane", Some("01.01.1990")));
        assert!(book.upcoming_birthdays(NaiveDate::MAX).is_empty());
        assert!(book.upcoming_birthdays_within(NaiveDate::MAX, 365).is_empty());
    }

    #[test]
    fn test_upcoming_custom_window() {
        let mut book = AddressBook::new();
        book.add(contact("Jane", Some("20.06.1990")));

        assert!(book.upcoming_birthdays(ymd(2024, 6, 10)).is_empty());
        let upcoming = book.upcoming_birthdays_within(ymd(2024, 6, 10), 10);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, ymd(2024, 6, 20));
    }
}
