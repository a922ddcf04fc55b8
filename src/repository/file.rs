//! File-backed store

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::BookStore;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for FileStore {
    fn read(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(contents) => {
                tracing::debug!(path = %self.path.display(), bytes = contents.len(), "Read library file");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Library file does not exist");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> AppResult<()> {
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "Wrote library file");
        Ok(())
    }
}
