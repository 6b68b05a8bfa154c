//! Splitting input lines into a command and its arguments.

use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Save,
    Menu,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "save" => Ok(Command::Save),
            "menu" => Ok(Command::Menu),
            "exit" | "close" => Ok(Command::Exit),
            other => Err(CommandError::InvalidCommand(other.to_string())),
        }
    }
}

/// Split a line into its lowercased command word and the remaining arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// The first `N` arguments, or `MissingArguments` if there are fewer.
///
/// Extra arguments are ignored.
pub fn required<'a, const N: usize>(args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(CommandError::MissingArguments)
}
