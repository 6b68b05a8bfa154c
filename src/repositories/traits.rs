use crate::error::StorageResult;
use crate::models::AddressBook;

/// How a [`LoadOutcome`] was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing was stored yet; the book is empty.
    Fresh,
    /// Stored state was read successfully.
    Restored,
    /// Stored state was unreadable or corrupt; the book is empty.
    Recovered(String),
}

/// The book returned by [`AddressBookRepository::load`] and how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub book: AddressBook,
    pub status: LoadStatus,
}

impl LoadOutcome {
    pub fn fresh() -> Self {
        Self {
            book: AddressBook::new(),
            status: LoadStatus::Fresh,
        }
    }

    pub fn restored(book: AddressBook) -> Self {
        Self {
            book,
            status: LoadStatus::Restored,
        }
    }

    pub fn recovered(reason: impl Into<String>) -> Self {
        Self {
            book: AddressBook::new(),
            status: LoadStatus::Recovered(reason.into()),
        }
    }

    /// Whether the stored state had to be discarded.
    pub fn is_recovered(&self) -> bool {
        matches!(self.status, LoadStatus::Recovered(_))
    }
}

/// Repository for persisting the address book.
///
/// Provides abstraction over durable storage, enabling different
/// implementations (JSON file, in-memory mock).
pub trait AddressBookRepository {
    /// Load the stored book.
    ///
    /// Never fails: missing or corrupt state yields an empty book, and the
    /// returned status tells the two apart.
    fn load(&self) -> LoadOutcome;

    /// Replace the stored state with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
