//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth, written as `DD.MM.YYYY`.
///
/// The string must be zero-padded (`05.03.1990`, not `5.3.1990`) and name a
/// real calendar date, so formatting a Birthday always gives back the input.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(Birthday::new("30.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on a malformed string or an
    /// impossible date such as `31.04.2000`.
    pub fn new(date: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(date) {
            return Err(ValidationError::InvalidBirthday(date.to_string()));
        }

        NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(date.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// Feb 29 falls on Mar 1 in non-leap years. `None` only when `year` is
    /// outside the range chrono can represent.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.occurrence_in(today.year() + 1)
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.date(), ymd(1990, 6, 15));
        assert_eq!(birthday.to_string(), "15.06.1990");
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-06-15").is_err());
        assert!(Birthday::new("5.6.1990").is_err());
        assert!(Birthday::new("15/06/1990").is_err());
        assert!(Birthday::new("15.06.90").is_err());
        assert!(Birthday::new("15.06.1990 ").is_err());
    }

    #[test]
    fn test_unpadded_date_error_asks_for_two_digits() {
        let err = Birthday::new("5.6.1990").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("5.6.1990".to_string()));
        assert!(err.to_string().contains("two-digit day and month"));
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.04.2000").is_err());
        assert!(Birthday::new("29.02.2001").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
        assert!(Birthday::new("29.02.2000").is_ok());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2024, 6, 10)), Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = Birthday::new("10.06.1990").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2024, 6, 10)), Some(ymd(2024, 6, 10)));
    }

    #[test]
    fn test_next_occurrence_already_passed_moves_to_next_year() {
        let birthday = Birthday::new("02.01.1995").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2024, 12, 29)), Some(ymd(2025, 1, 2)));
    }

    #[test]
    fn test_leap_day_rolls_to_march_first() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.occurrence_in(2025), Some(ymd(2025, 3, 1)));
        assert_eq!(birthday.occurrence_in(2028), Some(ymd(2028, 2, 29)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01.02.2003").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.02.2003\"");

        let parsed: Birthday = serde_json::from_str("\"01.02.2003\"").unwrap();
        assert_eq!(parsed, birthday);

        let result: Result<Birthday, _> = serde_json::from_str("\"2003-02-01\"");
        assert!(result.is_err());
    }
}
