//! In-memory store

use std::cell::RefCell;

use super::BookStore;
use crate::error::AppResult;

/// Keeps the snapshot in a string; useful for tests and for embedding the
/// catalog without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl BookStore for MemoryStore {
    fn read(&self) -> AppResult<Option<Vec<u8>>> {
        Ok(self.contents().map(String::into_bytes))
    }

    fn write(&self, contents: &str) -> AppResult<()> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}
