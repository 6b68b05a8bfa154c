//! Contact Book - a personal contact directory with birthday planning.
//!
//! Stores named contacts with phone numbers, an optional email and an
//! optional birthday, answers "whose birthday is coming up this week", and
//! persists everything to a JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, dates, names)
//! - **models**: The contact record and the address book with the birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence port and its JSON file implementation
//! - **commands**: Command parsing, handlers and the interactive session

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use commands::{Reply, Session};
pub use config::Config;
pub use domain::{
    validate_date, validate_phone, CalendarDate, ContactName, PhoneNumber, ValidationError,
};
pub use error::{CommandError, ConfigError, ContactError, ErrorKind, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday, Upsert};
pub use repositories::{AddressBookRepository, JsonFileRepository, LoadOutcome, LoadStatus};
