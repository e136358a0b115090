//! Result rows of the upcoming-birthdays query.

use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::domain::Name;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// A contact whose birthday falls inside the query window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: Name,

    /// The day the greeting goes out (weekends moved to Monday)
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn new(name: Name, congratulation_date: NaiveDate) -> Self {
        Self {
            name,
            congratulation_date,
        }
    }
}

/// Move a Saturday or Sunday to the following Monday.
pub fn congratulation_date(birthday: NaiveDate) -> NaiveDate {
    match birthday.weekday() {
        Weekday::Sat => birthday + Duration::days(2),
        Weekday::Sun => birthday + Duration::days(1),
        _ => birthday,
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}
