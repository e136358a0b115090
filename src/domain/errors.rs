//! Domain validation errors.

use std::fmt;

/// Errors that can occur while building or mutating contact values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is blank.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),

    /// The phone number is already stored on the record.
    DuplicatePhone(String),

    /// The record already has a birthday.
    BirthdayAlreadySet(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(
                    f,
                    "Invalid date format: {}. Use DD.MM.YYYY with a two-digit day and month",
                    date
                )
            }
            Self::DuplicatePhone(phone) => write!(f, "Phone number {} already exists", phone),
            Self::BirthdayAlreadySet(name) => write!(f, "Birthday for {} is already set", name),
        }
    }
}

impl std::error::Error for ValidationError {}
