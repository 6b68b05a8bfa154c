use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::{AddressBookRepository, LoadOutcome, LoadStatus};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the stored book in memory, can be told to fail saves or to report
/// corrupt data on load, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAddressBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    corrupt: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookRepository {
    /// Create a repository with nothing stored.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            corrupt: Arc::new(Mutex::new(false)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make `load` behave as if the stored data were unreadable.
    pub fn set_corrupt(&self, corrupt: bool) {
        *self.corrupt.lock().unwrap() = corrupt;
    }

    /// Make every `save` fail with an I/O error.
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The last successfully saved book.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockAddressBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBookRepository for MockAddressBookRepository {
    fn load(&self) -> LoadOutcome {
        self.track_call("load");

        if *self.corrupt.lock().unwrap() {
            return LoadOutcome::recovered("mock corruption");
        }

        match self.stored.lock().unwrap().clone() {
            Some(book) => LoadOutcome {
                book,
                status: LoadStatus::Restored,
            },
            None => LoadOutcome::fresh(),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
