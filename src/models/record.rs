//! Record model representing one contact in the address book.

use crate::domain::{validate_date, validate_phone, CalendarDate, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, its phone numbers, an optional email and birthday.
///
/// The name is fixed at construction; it is the record's key in an
/// [`AddressBook`](crate::models::AddressBook).
///
/// ```compile_fail
/// use contact_book::{ContactName, Record};
///
/// let mut record = Record::new("John", None, None).unwrap();
/// record.name = ContactName::new("Jane").unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    // Private so a record borrowed from an address book cannot be renamed
    // into a collision with another key
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Email address (not validated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<CalendarDate>,
}

impl Record {
    /// Create a new record, validating the name and the optional initial phone.
    ///
    /// An empty email is treated as no email.
    pub fn new(name: &str, phone: Option<&str>, email: Option<&str>) -> ContactResult<Self> {
        let mut record = Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            email: None,
            birthday: None,
        };
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        record.set_email(email);
        Ok(record)
    }

    /// The record's name as a string slice.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The record's validated name.
    pub fn contact_name(&self) -> &ContactName {
        &self.name
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        self.phones.push(validate_phone(phone)?);
        debug!(contact = %self.name, phone, "Phone added");
        Ok(())
    }

    /// Remove every phone equal to `phone`. Does nothing if none match.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        debug!(
            contact = %self.name,
            removed = before - self.phones.len(),
            "Phones removed"
        );
    }

    /// Replace the first phone equal to `old` with a validated `new`.
    ///
    /// # Errors
    ///
    /// `ContactError::PhoneNotFound` if no phone equals `old`, or a validation
    /// error if `new` is malformed. The record is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = validate_phone(new)?;
        debug!(contact = %self.name, old, new, "Phone edited");
        Ok(())
    }

    /// The first phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, overwriting any previous value.
    pub fn add_birthday(&mut self, date: &str) -> ContactResult<()> {
        self.birthday = Some(validate_date(date)?);
        debug!(contact = %self.name, birthday = date, "Birthday set");
        Ok(())
    }

    /// Set or clear the email. Empty strings clear it.
    pub fn set_email(&mut self, email: Option<&str>) {
        self.email = email.filter(|e| !e.is_empty()).map(str::to_string);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        if let Some(email) = &self.email {
            write!(f, ", email: {}", email)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
