use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::{AddressBookRepository, LoadOutcome};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredBookRef<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct StoredBook {
    version: u32,
    records: Vec<Record>,
}

/// Address book repository backed by a single JSON file.
///
/// Records are stored in insertion order. Saving writes a sibling temporary
/// file and renames it over the target, so readers never see a partial file.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn decode(bytes: &[u8]) -> StorageResult<AddressBook> {
        let stored: StoredBook = serde_json::from_slice(bytes)?;
        if stored.version != STORAGE_VERSION {
            return Err(StorageError::UnsupportedVersion(stored.version));
        }
        Ok(stored.records.into_iter().collect())
    }

    fn encode(book: &AddressBook) -> StorageResult<Vec<u8>> {
        let stored = StoredBookRef {
            version: STORAGE_VERSION,
            records: book.records().collect(),
        };
        Ok(serde_json::to_vec_pretty(&stored)?)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> LoadOutcome {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return LoadOutcome::fresh();
            }
            Err(e) => {
                let err = StorageError::from(e);
                warn!(path = %self.path.display(), error = %err, "Saved address book is unreadable, starting empty");
                return LoadOutcome::recovered(err.to_string());
            }
        };

        match Self::decode(&bytes) {
            Ok(book) => {
                info!(path = %self.path.display(), contacts = book.len(), "Address book loaded");
                LoadOutcome::restored(book)
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Saved address book is corrupt, starting empty");
                LoadOutcome::recovered(err.to_string())
            }
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = Self::encode(book)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        info!(path = %self.path.display(), contacts = book.len(), "Address book saved");
        Ok(())
    }
}
