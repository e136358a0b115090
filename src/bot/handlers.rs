//! Command handlers for the assistant bot.
//!
//! Every handler returns a `BookResult<String>`; `dispatch` turns errors into
//! the user-facing line, so no command can end the session by failing.

use super::commands::{parse_input, Command};
use crate::clock::Clock;
use crate::config::Config;
use crate::domain::Phone;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::repositories::AddressBook;
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next line
    Continue(String),
    /// Print the message and end the session
    Exit(String),
}

/// The assistant bot: an address book plus the command handlers around it.
pub struct AssistantBot {
    book: AddressBook,
    clock: Box<dyn Clock>,
    birthday_window_days: u32,
}

impl AssistantBot {
    /// Create a bot over `book`.
    pub fn new(book: AddressBook, clock: Box<dyn Clock>, config: &Config) -> Self {
        Self {
            book,
            clock,
            birthday_window_days: config.birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one raw input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Outcome> {
        let parsed = parse_input(line)?;
        match parsed.verb.parse::<Command>() {
            Ok(command) => Some(self.dispatch(command, &parsed.args)),
            Err(verb) => {
                debug!(verb = %verb, "Unknown command");
                Some(Outcome::Continue(INVALID_COMMAND.to_string()))
            }
        }
    }

    /// Run a parsed command.
    pub fn dispatch(&mut self, command: Command, args: &[String]) -> Outcome {
        debug!(command = ?command, args = args.len(), "Dispatching command");

        match self.execute(command, args) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(command = ?command, kind = ?e.kind(), error = %e, "Command failed");
                Outcome::Continue(e.user_message())
            }
        }
    }

    fn execute(&mut self, command: Command, args: &[String]) -> BookResult<Outcome> {
        let message = match command {
            // Arguments after close/exit are ignored
            Command::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
            Command::Hello => {
                expect_args::<0>(command, args)?;
                Ok(GREETING.to_string())
            }
            Command::Add => {
                let [name, phone] = expect_args::<2>(command, args)?;
                self.add_contact(name, phone)
            }
            Command::Change => {
                let [name, old, new] = expect_args::<3>(command, args)?;
                self.change_phone(name, old, new)
            }
            Command::Phone => {
                let [name] = expect_args::<1>(command, args)?;
                self.show_phone(name)
            }
            Command::All => {
                expect_args::<0>(command, args)?;
                Ok(self.show_all())
            }
            Command::AddBirthday => {
                let [name, date] = expect_args::<2>(command, args)?;
                self.add_birthday(name, date)
            }
            Command::ShowBirthday => {
                let [name] = expect_args::<1>(command, args)?;
                self.show_birthday(name)
            }
            Command::Birthdays => {
                expect_args::<0>(command, args)?;
                Ok(self.birthdays())
            }
            Command::Delete => {
                let [name] = expect_args::<1>(command, args)?;
                self.delete_contact(name)
            }
            Command::RemovePhone => {
                let [name, phone] = expect_args::<2>(command, args)?;
                self.remove_phone(name, phone)
            }
        }?;
        Ok(Outcome::Continue(message))
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<String> {
        // Validate first so a bad number never creates an empty contact
        let phone = Phone::new(phone)?;

        if let Some(record) = self.book.find_mut(name) {
            record.push_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::with_name(name)?;
        record.push_phone(phone)?;
        self.book.add(record);
        Ok("Contact added.".to_string())
    }

    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<String> {
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok("Phone number updated.".to_string())
    }

    fn show_phone(&self, name: &str) -> BookResult<String> {
        let record = self.record(name)?;
        if record.phones().is_empty() {
            return Ok(format!("{} has no phone numbers.", name));
        }
        Ok(record.phones_display())
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts saved.".to_string();
        }
        self.book
            .records()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, name: &str, date: &str) -> BookResult<String> {
        self.record_mut(name)?.add_birthday(date)?;
        Ok(format!("Birthday added for {}.", name))
    }

    fn show_birthday(&self, name: &str) -> BookResult<String> {
        match self.record(name)?.birthday() {
            Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
            None => Ok(format!("No birthday set for {}.", name)),
        }
    }

    fn birthdays(&self) -> String {
        let upcoming = self
            .book
            .upcoming_birthdays_within(self.clock.today(), self.birthday_window_days);

        if upcoming.is_empty() {
            return format!(
                "No birthdays in the next {} days.",
                self.birthday_window_days
            );
        }

        let mut lines = vec!["Upcoming birthdays:".to_string()];
        lines.extend(upcoming.iter().map(ToString::to_string));
        lines.join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> BookResult<String> {
        self.book
            .delete(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok("Contact deleted.".to_string())
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<String> {
        self.record_mut(name)?.remove_phone(phone)?;
        Ok("Phone number removed.".to_string())
    }

    fn record(&self, name: &str) -> BookResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}

/// Borrow exactly `N` arguments, or fail with the command's usage.
fn expect_args<const N: usize>(command: Command, args: &[String]) -> BookResult<&[String; N]> {
    args.try_into().map_err(|_| BookError::Usage {
        usage: command.usage(),
    })
}
