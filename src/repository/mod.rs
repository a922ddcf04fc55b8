//! Repository layer for the persisted library file

pub mod file;
pub mod memory;

use crate::error::AppResult;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Raw access to wherever the library snapshot lives.
///
/// Stores hand back raw bytes and accept rendered text; decoding, parsing and
/// formatting belong to the catalog.
#[cfg_attr(test, mockall::automock)]
pub trait BookStore {
    /// Current contents, or `None` when nothing has been stored yet
    fn read(&self) -> AppResult<Option<Vec<u8>>>;

    /// Replace the stored contents
    fn write(&self, contents: &str) -> AppResult<()>;
}
