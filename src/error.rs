//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed or conflicting field value
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A command was given the wrong number of arguments
    #[error("Usage: {usage}")]
    Usage { usage: &'static str },
}

/// Coarse classification of a [`BookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Usage,
}

impl BookError {
    /// Which family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ContactNotFound(_) | Self::PhoneNotFound(_) => ErrorKind::NotFound,
            Self::Usage { .. } => ErrorKind::Usage,
        }
    }

    /// The line shown to the user when a command fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => format!("Error: {}", e),
            Self::ContactNotFound(_) => "Contact not found.".to_string(),
            Self::PhoneNotFound(phone) => format!("Phone number {} not found.", phone),
            Self::Usage { usage } => format!("Usage: {}", usage),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = BookError::Validation(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be between 1 and 365".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be between 1 and 365"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            BookError::from(ValidationError::DuplicatePhone("0501234567".into())).kind(),
            ErrorKind::Validation
        );
        assert_eq!(BookError::ContactNotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(BookError::PhoneNotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(BookError::Usage { usage: "hello" }.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            BookError::ContactNotFound("Bob".into()).user_message(),
            "Contact not found."
        );
        assert_eq!(
            BookError::PhoneNotFound("0501234567".into()).user_message(),
            "Phone number 0501234567 not found."
        );
        assert_eq!(
            BookError::Usage { usage: "phone <name>" }.user_message(),
            "Usage: phone <name>"
        );
        assert!(BookError::from(ValidationError::InvalidPhone("12".into()))
            .user_message()
            .starts_with("Error: Invalid phone number: 12"));
    }
}
