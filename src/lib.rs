//! Contact Book - an interactive command-line assistant for contacts.
//!
//! This library stores names, phone numbers and birthdays in memory and
//! answers which contacts have a birthday in the coming week, moving weekend
//! greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Contact records and birthday query rows
//! - **repositories**: The in-memory address book
//! - **bot**: Command parsing, handlers and the read-eval-print loop
//! - **clock**: Source of today's date
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod bot;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use bot::{run_bot, AssistantBot, Command, Outcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ErrorKind};
pub use models::{Record, UpcomingBirthday};
pub use repositories::AddressBook;
