//! Command layer for the interactive assistant.
//!
//! A [`Session`] owns the address book and its repository for the lifetime
//! of the process. [`Session::dispatch`] is the single place where typed
//! errors become reply lines; nothing below it prints or recovers.

pub mod handlers;
pub mod parser;
pub mod repl;

pub use parser::{parse_input, Command};

use crate::domain::CalendarDate;
use crate::error::{CommandError, CommandResult, ErrorKind};
use crate::models::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::repositories::{AddressBookRepository, LoadStatus};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

/// What the REPL should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank input, print nothing
    Silent,
    /// Print the message and keep reading
    Message(String),
    /// Print the message and stop; `saved` is false if the final save failed
    Exit { message: String, saved: bool },
}

/// An open address book plus the storage it came from.
pub struct Session {
    book: AddressBook,
    repository: Box<dyn AddressBookRepository>,
    load_status: LoadStatus,
    birthday_window_days: u32,
}

impl Session {
    /// Load the address book from `repository`.
    pub fn load(repository: Box<dyn AddressBookRepository>) -> Self {
        let outcome = repository.load();
        debug!(status = ?outcome.status, records = outcome.book.len(), "Address book loaded");
        Self {
            book: outcome.book,
            repository,
            load_status: outcome.status,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Set how many days ahead `birthdays` looks.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// How the book was obtained at start-up.
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Write the book to the repository.
    pub fn save(&self) -> CommandResult<()> {
        self.repository.save(&self.book)?;
        Ok(())
    }

    /// Handle one input line as of `today`.
    ///
    /// Never panics and never returns an error: every failure is rendered
    /// as a single reply line.
    pub fn dispatch(&mut self, line: &str, today: CalendarDate) -> Reply {
        let Some((word, args)) = parse_input(line) else {
            return Reply::Silent;
        };

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(err) => return Reply::Message(err.to_string()),
        };

        if command == Command::Exit {
            return self.exit();
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.execute(command, &args, today)
        }))
        .unwrap_or_else(|payload| Err(CommandError::Unexpected(panic_message(payload))));

        match result {
            Ok(message) => Reply::Message(message),
            Err(err) => {
                match err.kind() {
                    ErrorKind::Io | ErrorKind::Unexpected => {
                        error!(command = ?command, error = %err, "Command failed")
                    }
                    _ => debug!(command = ?command, error = %err, "Command rejected"),
                }
                Reply::Message(err.to_string())
            }
        }
    }

    /// Save and produce the farewell reply.
    pub fn exit(&self) -> Reply {
        match self.save() {
            Ok(()) => Reply::Exit {
                message: "Data saved. Good bye!".to_string(),
                saved: true,
            },
            Err(err) => {
                error!(error = %err, "Final save failed");
                Reply::Exit {
                    message: err.to_string(),
                    saved: false,
                }
            }
        }
    }

    fn execute(
        &mut self,
        command: Command,
        args: &[&str],
        today: CalendarDate,
    ) -> CommandResult<String> {
        let book = &mut self.book;
        match command {
            Command::Hello => Ok(handlers::hello()),
            Command::Add => handlers::add_contact(args, book),
            Command::Change => handlers::change_contact(args, book),
            Command::Phone => handlers::show_phone(args, book),
            Command::All => Ok(handlers::show_all(book)),
            Command::AddBirthday => handlers::add_birthday(args, book),
            Command::ShowBirthday => handlers::show_birthday(args, book),
            Command::Birthdays => Ok(handlers::birthdays(
                book,
                today,
                self.birthday_window_days,
            )),
            Command::RemovePhone => handlers::remove_phone(args, book),
            Command::Delete => handlers::delete_contact(args, book),
            Command::Save => {
                self.save()?;
                Ok("Data saved.".to_string())
            }
            Command::Menu => Ok(handlers::MENU.to_string()),
            Command::Exit => Err(CommandError::Unexpected(
                "exit must be handled before execution".to_string(),
            )),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
