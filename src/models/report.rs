//! Report values returned by catalog operations.
//!
//! The catalog never prints; the console renders these through `Display`.

use std::fmt;

use super::book::{BorrowOutcome, ReturnOutcome};

/// What happened when a title was borrowed or returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanReport {
    Borrowed(String),
    AlreadyBorrowed(String),
    Returned(String),
    NotBorrowed(String),
    NotFound(String),
}

impl LoanReport {
    pub fn from_borrow(title: &str, outcome: BorrowOutcome) -> Self {
        match outcome {
            BorrowOutcome::Borrowed => LoanReport::Borrowed(title.to_string()),
            BorrowOutcome::AlreadyBorrowed => LoanReport::AlreadyBorrowed(title.to_string()),
        }
    }

    pub fn from_return(title: &str, outcome: ReturnOutcome) -> Self {
        match outcome {
            ReturnOutcome::Returned => LoanReport::Returned(title.to_string()),
            ReturnOutcome::NotBorrowed => LoanReport::NotBorrowed(title.to_string()),
        }
    }
}

impl fmt::Display for LoanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanReport::Borrowed(title) => write!(f, "Thank you for borrowing {}", title),
            LoanReport::AlreadyBorrowed(title) => write!(f, "{} is already borrowed", title),
            LoanReport::Returned(title) => write!(f, "Thank you for returning {}", title),
            LoanReport::NotBorrowed(title) => write!(f, "{} was not borrowed", title),
            LoanReport::NotFound(title) => write!(f, "{} is not found in library", title),
        }
    }
}

/// Outcome of loading persisted books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadReport {
    /// File missing or empty; catalog untouched
    NoData,
    Loaded(usize),
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadReport::NoData => {
                write!(f, "No library data is available to load. File missing or empty")
            }
            LoadReport::Loaded(_) => write!(f, "Library is loaded."),
        }
    }
}

/// Outcome of saving the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveReport {
    /// Catalog empty; the data file was left alone
    NothingToSave,
    Saved(usize),
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveReport::NothingToSave => write!(f, "Nothing to save"),
            SaveReport::Saved(1) => write!(f, "Saved 1 book"),
            SaveReport::Saved(count) => write!(f, "Saved {} books", count),
        }
    }
}
