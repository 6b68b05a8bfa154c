//! Data models for the contact book.
//!
//! This module contains the contact [`Record`] and the [`AddressBook`] that
//! owns the records and answers the upcoming-birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, Upsert, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
