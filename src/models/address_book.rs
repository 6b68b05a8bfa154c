//! The address book: an insertion-ordered collection of records keyed by name.

use crate::domain::{CalendarDate, ContactName};
use crate::error::ContactResult;
use crate::models::Record;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Default look-ahead window for [`AddressBook::upcoming_birthdays`], in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A birthday falling inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date to congratulate on, moved to Monday if the birthday is on a weekend
    pub effective_date: CalendarDate,
}

/// Result of [`AddressBook::add_or_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new record was created
    Added,
    /// The existing record was extended in place
    Updated,
}

/// Owns every [`Record`], keyed by name.
///
/// Iteration follows insertion order. Replacing a record keeps its original
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    /// Insert `record` under its name, replacing any existing record wholesale.
    ///
    /// Nothing from the replaced record is merged into the new one; use
    /// [`add_or_update`](Self::add_or_update) to extend an existing contact.
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name()) {
            Some(index) => {
                debug!(contact = record.name(), "Record replaced");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!(contact = record.name(), "Record added");
                self.records.push(record);
                None
            }
        }
    }

    /// Create a contact, or extend an existing one in place.
    ///
    /// For an existing contact the phone is appended and the email is
    /// overwritten when a non-empty one is given; the birthday and other
    /// phones are kept. On a validation error the book is unchanged.
    pub fn add_or_update(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> ContactResult<Upsert> {
        match self.find_mut(name) {
            Some(record) => {
                record.add_phone(phone)?;
                if email.is_some_and(|e| !e.is_empty()) {
                    record.set_email(email);
                }
                Ok(Upsert::Updated)
            }
            None => {
                let record = Record::new(name, Some(phone), email)?;
                self.add_record(record);
                Ok(Upsert::Added)
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record with this name. Does nothing if it doesn't exist.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        debug!(contact = name, "Record deleted");
        Some(self.records.remove(index))
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &ContactName> {
        self.records.iter().map(Record::contact_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays in the next seven days, see
    /// [`upcoming_birthdays_within`](Self::upcoming_birthdays_within).
    pub fn upcoming_birthdays(&self, today: CalendarDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Contacts whose next birthday is between `today` and `today + window_days`
    /// inclusive.
    ///
    /// The next birthday is the anniversary in `today`'s year, or in the
    /// following year if that has already passed. A birthday on a Saturday
    /// or Sunday is reported on the following Monday; the window is checked
    /// before that shift. Results follow insertion order.
    pub fn upcoming_birthdays_within(
        &self,
        today: CalendarDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday?;
                let candidate = next_anniversary(&birthday, &today)?;

                let days_until = today.days_until(&candidate);
                if !(0..=i64::from(window_days)).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    effective_date: shift_off_weekend(candidate)?,
                })
            })
            .collect()
    }
}

/// The first anniversary of `birthday` on or after `today`.
fn next_anniversary(birthday: &CalendarDate, today: &CalendarDate) -> Option<CalendarDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year < *today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the following Monday.
fn shift_off_weekend(date: CalendarDate) -> Option<CalendarDate> {
    match date.weekday() {
        Weekday::Sat => date.add_days(2),
        Weekday::Sun => date.add_days(1),
        _ => Some(date),
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Address book is empty");
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}. {}", i + 1, record)?;
        }
        Ok(())
    }
}

impl FromIterator<Record> for AddressBook {
    /// Later records replace earlier ones with the same name.
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
