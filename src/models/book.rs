//! Book model and its borrow transitions

use serde::{Deserialize, Deserializer, Serialize};

/// One book held by the library, as persisted in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    #[serde(default, deserialize_with = "null_as_false")]
    is_borrowed: bool,
}

/// Result of asking a book to be borrowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed,
    AlreadyBorrowed,
}

/// Result of handing a book back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    NotBorrowed,
}

impl Book {
    /// Create an available book
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            is_borrowed: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_borrowed(&self) -> bool {
        self.is_borrowed
    }

    pub fn borrow(&mut self) -> BorrowOutcome {
        if self.is_borrowed {
            return BorrowOutcome::AlreadyBorrowed;
        }
        self.is_borrowed = true;
        BorrowOutcome::Borrowed
    }

    pub fn return_book(&mut self) -> ReturnOutcome {
        if !self.is_borrowed {
            return ReturnOutcome::NotBorrowed;
        }
        self.is_borrowed = false;
        ReturnOutcome::Returned
    }

    /// Case-insensitive title comparison
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive author comparison
    pub fn has_author(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_borrowed {
            "Borrowed"
        } else {
            "available"
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book: {}, Author: {} - status: {}",
            self.title,
            self.author,
            self.status_label()
        )
    }
}

// Older files may carry `"is_borrowed": null`.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
