//! Test fixtures and sample data.
//!
//! This module provides reusable records and address books for tests.

use contact_book::{AddressBook, CalendarDate, Record};

/// Parse a `DD.MM.YYYY` date, panicking on bad test input.
pub fn date(raw: &str) -> CalendarDate {
    CalendarDate::parse(raw).expect("fixture date must be valid")
}

/// Create a record with a single phone number.
pub fn sample_record(name: &str, phone: &str) -> Record {
    Record::new(name, Some(phone), None).expect("fixture record must be valid")
}

/// Create a record with a birthday and no phones.
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name, None, None).expect("fixture record must be valid");
    record
        .add_birthday(birthday)
        .expect("fixture birthday must be valid");
    record
}

/// A small address book with every field populated somewhere.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new("John", Some("1234567890"), Some("john@example.com"))
        .expect("fixture record must be valid");
    john.add_phone("5555555555").expect("fixture phone must be valid");
    john.add_birthday("12.06.1990").expect("fixture birthday must be valid");
    book.add_record(john);

    book.add_record(sample_record("Jane", "0987654321"));
    book.add_record(record_with_birthday("Leap", "29.02.1996"));

    book
}
