//! Data models for the contact book.
//!
//! A `Record` is one contact built from the domain value objects; an
//! `UpcomingBirthday` is one row of the birthday query.

pub mod record;
pub mod upcoming;

pub use record::Record;
pub use upcoming::{congratulation_date, UpcomingBirthday};
