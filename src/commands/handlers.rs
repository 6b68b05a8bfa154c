//! One handler per command.
//!
//! Handlers take the raw arguments and the address book, and either return
//! the reply text or a typed error. They never print.

use super::parser::required;
use crate::domain::CalendarDate;
use crate::error::{CommandResult, ContactError};
use crate::models::{AddressBook, Upsert, DEFAULT_BIRTHDAY_WINDOW_DAYS};

/// Help text shown by `menu`.
pub const MENU: &str = "\
Available commands:
1. hello - Greet the bot
2. add <name> <phone> [email] - Add or update contact
3. change <name> <old_phone> <new_phone> - Change phone number
4. phone <name> - Show phone number(s) for contact
5. all - Show all contacts
6. add-birthday <name> <DD.MM.YYYY> - Add birthday
7. show-birthday <name> - Show birthday
8. birthdays - Show upcoming birthdays
9. remove-phone <name> <phone> - Remove a phone number
10. delete <name> - Delete contact
11. save - Save the address book
12. exit/close - Save and exit";

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone> [email]`: create a contact or extend an existing one.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = required(args)?;
    let email = args.get(2).copied();

    let message = match book.add_or_update(name, phone, email)? {
        Upsert::Added => "Contact added.",
        Upsert::Updated => "Contact updated.",
    };
    Ok(message.to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = required(args)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = required(args)?;
    let record = book
        .find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
    if record.phones.is_empty() {
        return Err(ContactError::NoPhones(name.to_string()).into());
    }

    let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
    Ok(format!("{}: {}", name, phones.join(", ")))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }
    book.records()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = required(args)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
    record.add_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = required(args)?;
    let birthday = book
        .find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?
        .birthday
        .ok_or_else(|| ContactError::NoBirthday(name.to_string()))?;
    Ok(format!("{}'s birthday is {}", name, birthday))
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: CalendarDate, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return if window_days == DEFAULT_BIRTHDAY_WINDOW_DAYS {
            "No upcoming birthdays in the next week.".to_string()
        } else {
            format!("No upcoming birthdays in the next {} days.", window_days)
        };
    }
    upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.effective_date))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = required(args)?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
    if record.find_phone(phone).is_none() {
        return Err(ContactError::PhoneNotFound(phone.to_string()).into());
    }
    record.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

/// `delete <name>`: succeeds whether or not the contact existed.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = required(args)?;
    book.delete(name);
    Ok("Contact deleted.".to_string())
}
