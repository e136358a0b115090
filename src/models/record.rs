//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and never
/// repeat; the birthday can be set once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name string.
    pub fn with_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        Name::new(name).map(Self::new)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Look up one of this record's phones.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == number)
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// `Validation` if the number is malformed or already on the record.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        let phone = Phone::new(number)?;
        self.push_phone(phone)
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: Phone) -> BookResult<()> {
        if self.phones.contains(&phone) {
            return Err(ValidationError::DuplicatePhone(phone.into_inner()).into());
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// Nothing changes on failure.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if `old` is absent, `Validation` if `new` is malformed
    /// or duplicates another phone of this record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        let phone = Phone::new(new)?;
        if old != new && self.phones.contains(&phone) {
            return Err(ValidationError::DuplicatePhone(phone.into_inner()).into());
        }

        self.phones[index] = phone;
        Ok(())
    }

    /// Remove a phone number.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if the record does not have it.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == number)
            .ok_or_else(|| BookError::PhoneNotFound(number.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Set the birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// `Validation` if the date is malformed or a birthday is already set.
    pub fn add_birthday(&mut self, date: &str) -> BookResult<()> {
        let birthday = Birthday::new(date)?;
        if self.birthday.is_some() {
            return Err(ValidationError::BirthdayAlreadySet(self.name.to_string()).into());
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `", "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "-".to_string()
        } else {
            self.phones_display()
        };
        match &self.birthday {
            Some(birthday) => write!(f, "{}: {} | Birthday: {}", self.name, phones, birthday),
            None => write!(f, "{}: {} | Birthday: N/A", self.name, phones),
        }
    }
}
