//! End-to-end test utilities.
//!
//! Helpers that run a [`Session`] against a real JSON file in a temporary
//! directory.

#![allow(dead_code)]

use contact_book::{CalendarDate, JsonFileRepository, Reply, Session};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

/// A temporary directory holding one address book file.
pub struct TestStore {
    // Keeps the directory alive for the lifetime of the store
    _dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("addressbook.json");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository(&self) -> JsonFileRepository {
        JsonFileRepository::new(&self.path)
    }

    /// Open a session on the store's file.
    pub fn open(&self) -> Session {
        Session::load(Box::new(self.repository()))
    }
}

/// Run `line` and return the printed message, panicking on exit replies.
pub fn run(session: &mut Session, line: &str, today: CalendarDate) -> String {
    match session.dispatch(line, today) {
        Reply::Message(message) => message,
        other => panic!("expected a message for {:?}, got {:?}", line, other),
    }
}
