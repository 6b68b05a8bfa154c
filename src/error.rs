//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain value objects report [`ValidationError`]; everything above them wraps it.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Malformed phone, date or name input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with the given name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The contact has no phone equal to the given value
    #[error("Phone number not found.")]
    PhoneNotFound(String),

    /// The contact exists but has no phone numbers
    #[error("No phone found for {0}.")]
    NoPhones(String),

    /// The contact exists but has no birthday set
    #[error("No birthday found for {0}.")]
    NoBirthday(String),
}

/// Errors that can occur while reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode the stored document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored document has a format version this build cannot read
    #[error("Unsupported storage version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors surfaced by the command layer.
///
/// Every variant renders as the single line shown to the user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A domain operation failed
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// The command needs more arguments than were given
    #[error("Please provide all necessary arguments.")]
    MissingArguments,

    /// The command word is not recognised
    #[error("Invalid command. Type 'menu' to see available commands.")]
    InvalidCommand(String),

    /// Saving the address book failed
    #[error("Failed to save address book: {0}")]
    Storage(#[from] StorageError),

    /// Anything not classified above
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Coarse classification of a [`CommandError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    ArgumentCount,
    InvalidCommand,
    Io,
    Unexpected,
}

impl CommandError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Contact(ContactError::Validation(_)) => ErrorKind::Validation,
            Self::Contact(_) => ErrorKind::NotFound,
            Self::MissingArguments => ErrorKind::ArgumentCount,
            Self::InvalidCommand(_) => ErrorKind::InvalidCommand,
            Self::Storage(_) => ErrorKind::Io,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Contact(ContactError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
